//! Reading and writing configs and outcomes as JSON strings or files.

use crate::error::PersistError;
use std::{fs, path::Path};

pub trait ToJson {
    fn to_json(&self) -> Result<String, PersistError>;

    fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

pub trait FromJson: Sized {
    fn from_json(s: &str) -> Result<Self, PersistError>;

    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

impl<T: serde::Serialize> ToJson for T {
    fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<T: for<'de> serde::Deserialize<'de>> FromJson for T {
    fn from_json(s: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{random::WyRng, Config, Outcome, Simulation};
    use std::env::temp_dir;

    #[test]
    fn test_config_file() {
        let config = Config::default()
            .with_goal(750.)
            .with_weights(100, 400, 250)
            .with_seed(5);
        let path = temp_dir().join(format!("heft-config-{}.json", std::process::id()));
        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_outcome_json() {
        let sim = Simulation::new(Config::default().with_goal(400.).with_generation_limit(3)).unwrap();
        let outcome = sim.run_with(&mut WyRng::seeded(1), &mut ()).unwrap();
        let json = outcome.to_json().unwrap();
        assert!(json.contains("\"state\""));
        assert_eq!(Outcome::from_json(&json).unwrap().population, outcome.population);
    }

    #[test]
    fn test_bad_input() {
        assert!(matches!(
            Config::from_json("{\"goal\": "),
            Err(PersistError::Json(_))
        ));
        assert!(matches!(
            Config::from_file("/nonexistent/heft.json"),
            Err(PersistError::Io(_))
        ));
    }
}
