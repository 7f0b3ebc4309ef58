use crate::domain::models::TaskSettings;
use anyhow::Context;

/// The configuration parameters for the lambda, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The Amazon Connect instance contacts and tasks belong to
    pub instance_id: String,

    /// The contact flow new voicemail tasks are started in
    pub contact_flow_id: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_reader(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable lookup. Blank values count as missing.
    pub fn from_reader<F>(read: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            read(name)
                .filter(|v| !v.trim().is_empty())
                .context(format!("{name} must be provided"))
        };

        let instance_id = required("INSTANCE_ID")?;
        let contact_flow_id = required("CONTACT_FLOW_ID")?;

        Ok(Config {
            instance_id,
            contact_flow_id,
        })
    }

    /// the parts of the config every task is created with
    pub fn task_settings(&self) -> TaskSettings {
        TaskSettings {
            instance_id: self.instance_id.clone(),
            contact_flow_id: self.contact_flow_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn reader(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn it_reads_both_ids() {
        let config = Config::from_reader(reader(&[
            ("INSTANCE_ID", "instance-1"),
            ("CONTACT_FLOW_ID", "flow-1"),
        ]))
        .unwrap();

        assert_eq!(
            config.task_settings(),
            TaskSettings {
                instance_id: "instance-1".to_string(),
                contact_flow_id: "flow-1".to_string(),
            }
        );
    }

    #[test]
    fn it_requires_the_instance_id() {
        let err = Config::from_reader(reader(&[("CONTACT_FLOW_ID", "flow-1")])).unwrap_err();
        assert_eq!(err.to_string(), "INSTANCE_ID must be provided");
    }

    #[test]
    fn it_treats_blank_values_as_missing() {
        let err = Config::from_reader(reader(&[
            ("INSTANCE_ID", "instance-1"),
            ("CONTACT_FLOW_ID", "  "),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "CONTACT_FLOW_ID must be provided");
    }
}
