pub const DEBUG_ENV: &str = "COMPDEMO_DEBUG";
pub const TIMING_ENV: &str = "COMPDEMO_TIMING";

/// Runtime switches, resolved once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub debug: bool,
    pub timing: bool,
}

impl Settings {
    /// Combine command-line flags with the environment and the `debug` feature.
    pub fn resolve(debug_flag: bool, timing_flag: bool) -> Self {
        Self::resolve_with(debug_flag, timing_flag, |key| std::env::var_os(key).is_some())
    }

    fn resolve_with<F>(debug_flag: bool, timing_flag: bool, env_is_set: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        Self {
            debug: cfg!(feature = "debug") || debug_flag || env_is_set(DEBUG_ENV),
            timing: timing_flag || env_is_set(TIMING_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Settings, DEBUG_ENV, TIMING_ENV};

    #[test]
    fn flags_enable_switches() {
        let settings = Settings::resolve_with(true, true, |_| false);
        assert!(settings.debug);
        assert!(settings.timing);
    }

    #[test]
    fn environment_enables_switches() {
        let settings = Settings::resolve_with(false, false, |key| key == DEBUG_ENV);
        assert!(settings.debug);
        assert!(!settings.timing);

        let settings = Settings::resolve_with(false, false, |key| key == TIMING_ENV);
        assert!(settings.timing);
    }

    #[cfg(not(feature = "debug"))]
    #[test]
    fn everything_off_by_default() {
        let settings = Settings::resolve_with(false, false, |_| false);
        assert_eq!(settings, Settings::default());
    }
}
