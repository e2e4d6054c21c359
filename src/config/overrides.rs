use super::core::SrcmirrorConfig;
use crate::core::OutputLayout;

/// Command-line values that take precedence over the config file.
///
/// `None` and `false` mean "not given on the command line"; flags only ever
/// switch a setting away from its default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub layout: Option<OutputLayout>,
    pub exclude_migrations: bool,
    pub migrations_folder: Option<String>,
    pub exclude_interfaces: bool,
    pub exclude_tests: bool,
    pub exclude_generated: bool,
    pub strip_docs: bool,
    pub keep_regions: bool,
    pub strip_empty_lines: bool,
    pub optimize_whitespace: bool,
    pub respect_gitignore: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: SrcmirrorConfig) -> SrcmirrorConfig {
        if let Some(layout) = self.layout {
            config.output.layout = layout;
        }
        if self.respect_gitignore {
            config.output.respect_gitignore = true;
        }

        let filter = &mut config.filter;
        if self.exclude_migrations {
            filter.include_migrations = false;
        }
        if let Some(folder) = &self.migrations_folder {
            filter.migrations_folder = folder.clone();
        }
        if self.exclude_interfaces {
            filter.include_interfaces = false;
        }
        if self.exclude_tests {
            filter.include_tests = false;
        }
        if self.exclude_generated {
            filter.include_generated = false;
        }

        let scrub = &mut config.scrub;
        scrub.strip_docs |= self.strip_docs;
        scrub.strip_empty_lines |= self.strip_empty_lines;
        scrub.optimize_whitespace |= self.optimize_whitespace;
        if self.keep_regions {
            scrub.strip_regions = false;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_is_identity() {
        let config = SrcmirrorConfig::default();
        assert_eq!(ConfigOverrides::default().apply(config.clone()), config);
    }

    #[test]
    fn test_flags_switch_settings() {
        let overrides = ConfigOverrides {
            layout: Some(OutputLayout::Flat),
            exclude_tests: true,
            migrations_folder: Some("Db".to_string()),
            keep_regions: true,
            strip_docs: true,
            ..ConfigOverrides::default()
        };
        let config = overrides.apply(SrcmirrorConfig::default());

        assert_eq!(config.output.layout, OutputLayout::Flat);
        assert!(!config.filter.include_tests);
        assert!(config.filter.include_migrations);
        assert_eq!(config.filter.migrations_folder, "Db");
        assert!(!config.scrub.strip_regions);
        assert!(config.scrub.strip_docs);
    }

    #[test]
    fn test_file_values_survive_absent_flags() {
        let mut base = SrcmirrorConfig::default();
        base.scrub.optimize_whitespace = true;
        base.filter.include_generated = false;

        let config = ConfigOverrides::default().apply(base);
        assert!(config.scrub.optimize_whitespace);
        assert!(!config.filter.include_generated);
    }
}
