use std::env;
use std::path::PathBuf;

/// Directory name used under `~/.config` for site state.
const CONFIG_DIR_NAME: &str = "symposium";

/// Return the user's home directory path.
///
/// Uses HOME on Unix-like systems and USERPROFILE on Windows.
pub fn get_home_dir() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Default directory for `site.json`, the storage file and console logs.
///
/// Resolves to `~/.config/symposium`; `None` when no home directory is set.
pub fn default_config_dir() -> Option<PathBuf> {
    get_home_dir().map(|home| home.join(".config").join(CONFIG_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<F: FnOnce()>(home: Option<&str>, userprofile: Option<&str>, f: F) {
        let _guard = ENV_LOCK.lock().unwrap();
        let prev_home = env::var("HOME").ok();
        let prev_userprofile = env::var("USERPROFILE").ok();

        match home {
            Some(value) => env::set_var("HOME", value),
            None => env::remove_var("HOME"),
        }
        match userprofile {
            Some(value) => env::set_var("USERPROFILE", value),
            None => env::remove_var("USERPROFILE"),
        }

        f();

        match prev_home {
            Some(value) => env::set_var("HOME", value),
            None => env::remove_var("HOME"),
        }
        match prev_userprofile {
            Some(value) => env::set_var("USERPROFILE", value),
            None => env::remove_var("USERPROFILE"),
        }
    }

    #[test]
    fn home_dir_prefers_home() {
        with_env(Some("/tmp/home"), Some("/tmp/profile"), || {
            assert_eq!(get_home_dir(), Some(PathBuf::from("/tmp/home")));
        });
    }

    #[test]
    fn home_dir_falls_back_to_userprofile() {
        with_env(Some(""), Some("/tmp/profile"), || {
            assert_eq!(get_home_dir(), Some(PathBuf::from("/tmp/profile")));
        });
    }

    #[test]
    fn config_dir_is_under_dot_config() {
        with_env(Some("/tmp/home"), None, || {
            assert_eq!(
                default_config_dir(),
                Some(PathBuf::from("/tmp/home/.config/symposium"))
            );
        });
    }

    #[test]
    fn config_dir_none_without_home() {
        with_env(None, None, || {
            assert!(default_config_dir().is_none());
        });
    }
}
