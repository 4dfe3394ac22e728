//! Built-in threshold profiles
//!
//! The table is constructed once at process start and never mutated at
//! runtime. Insertion order defines the display order in the edit form, so
//! entries are kept in an ordered sequence rather than a hash map.

use crate::types::Profile;

/// The built-in, process-wide profile table.
///
/// Maps profile names to their threshold/timer definitions. The literal
/// values are load-bearing: the measurement process and the autofill
/// endpoint both consume them as-is.
#[derive(Debug, Clone, Default)]
pub struct ProfileTable {
    entries: Vec<(String, Profile)>,
}

impl ProfileTable {
    /// Build the table of built-in profiles.
    pub fn builtin() -> Self {
        let mut table = Self::default();

        table.push(
            "Default",
            Profile {
                temp_crit_low: 5.0,
                temp_crit_high: 33.0,
                temp_warn_low: 18.0,
                temp_warn_high: 28.0,
                rh_crit_low: 10.0,
                rh_crit_high: 82.0,
                rh_warn_low: 30.0,
                rh_warn_high: 70.0,
                lux_crit: 150,
                lux_warn: 350,
                eco2_crit: 4000,
                eco2_warn: 2000,
                meas_t_ms: Some(60000),
                dht11_t_ms: Some(5000),
                bh1750_t_ms: Some(5000),
                ccs811_t_ms: Some(5000),
                output_t_ms: Some(5000),
            },
        );

        table.push(
            "Aulas B",
            Profile {
                temp_crit_low: 10.0,
                temp_crit_high: 35.5,
                temp_warn_low: 20.0,
                temp_warn_high: 30.0,
                rh_crit_low: 5.0,
                rh_crit_high: 90.0,
                rh_warn_low: 20.0,
                rh_warn_high: 80.0,
                lux_crit: 90,
                lux_warn: 420,
                eco2_crit: 4000,
                eco2_warn: 2500,
                meas_t_ms: None,
                dht11_t_ms: None,
                bh1750_t_ms: None,
                ccs811_t_ms: None,
                output_t_ms: None,
            },
        );

        table.push(
            "Biblioteca",
            Profile {
                temp_crit_low: 10.0,
                temp_crit_high: 38.5,
                temp_warn_low: 19.0,
                temp_warn_high: 33.0,
                rh_crit_low: 10.0,
                rh_crit_high: 86.5,
                rh_warn_low: 21.0,
                rh_warn_high: 75.0,
                lux_crit: 0,
                lux_warn: 400,
                eco2_crit: 4500,
                eco2_warn: 3000,
                meas_t_ms: None,
                dht11_t_ms: None,
                bh1750_t_ms: None,
                ccs811_t_ms: None,
                output_t_ms: None,
            },
        );

        table.push(
            "Hogar Urbano",
            Profile {
                temp_crit_low: 10.0,
                temp_crit_high: 30.0,
                temp_warn_low: 17.0,
                temp_warn_high: 28.0,
                rh_crit_low: 10.0,
                rh_crit_high: 80.0,
                rh_warn_low: 20.0,
                rh_warn_high: 70.0,
                lux_crit: 80,
                lux_warn: 250,
                eco2_crit: 4000,
                eco2_warn: 2000,
                meas_t_ms: None,
                dht11_t_ms: None,
                bh1750_t_ms: None,
                ccs811_t_ms: None,
                output_t_ms: None,
            },
        );

        table.push(
            "Gimnasio/Entrenam.",
            Profile {
                temp_crit_low: 10.0,
                temp_crit_high: 30.0,
                temp_warn_low: 17.0,
                temp_warn_high: 28.0,
                rh_crit_low: 10.0,
                rh_crit_high: 80.0,
                rh_warn_low: 20.0,
                rh_warn_high: 70.0,
                lux_crit: 80,
                lux_warn: 250,
                eco2_crit: 4000,
                eco2_warn: 2000,
                meas_t_ms: None,
                dht11_t_ms: None,
                bh1750_t_ms: None,
                ccs811_t_ms: None,
                output_t_ms: None,
            },
        );

        table.push(
            "Quirófano/ICU/Radiolog.",
            Profile {
                temp_crit_low: 10.0,
                temp_crit_high: 30.0,
                temp_warn_low: 17.0,
                temp_warn_high: 28.0,
                rh_crit_low: 10.0,
                rh_crit_high: 80.0,
                rh_warn_low: 20.0,
                rh_warn_high: 70.0,
                lux_crit: 80,
                lux_warn: 250,
                eco2_crit: 4000,
                eco2_warn: 2000,
                meas_t_ms: None,
                dht11_t_ms: None,
                bh1750_t_ms: None,
                ccs811_t_ms: None,
                output_t_ms: None,
            },
        );

        table.push(
            "CSIC Aulas",
            Profile {
                temp_crit_low: 5.0,
                temp_crit_high: 33.0,
                temp_warn_low: 18.0,
                temp_warn_high: 28.0,
                rh_crit_low: 10.0,
                rh_crit_high: 82.0,
                rh_warn_low: 30.0,
                rh_warn_high: 70.0,
                lux_crit: 150,
                lux_warn: 350,
                eco2_crit: 2100,
                eco2_warn: 1200,
                meas_t_ms: None,
                dht11_t_ms: None,
                bh1750_t_ms: None,
                ccs811_t_ms: None,
                output_t_ms: None,
            },
        );

        table.push(
            "OMS Trabajo",
            Profile {
                temp_crit_low: 15.0,
                temp_crit_high: 32.25,
                temp_warn_low: 18.0,
                temp_warn_high: 29.75,
                rh_crit_low: 20.0,
                rh_crit_high: 70.0,
                rh_warn_low: 25.0,
                rh_warn_high: 65.0,
                lux_crit: 200,
                lux_warn: 450,
                eco2_crit: 2175,
                eco2_warn: 1500,
                meas_t_ms: None,
                dht11_t_ms: None,
                bh1750_t_ms: None,
                ccs811_t_ms: None,
                output_t_ms: None,
            },
        );

        table.push(
            "CDC EEUU",
            Profile {
                temp_crit_low: 22.33,
                temp_crit_high: 35.68,
                temp_warn_low: 15.24,
                temp_warn_high: 31.49,
                rh_crit_low: 20.0,
                rh_crit_high: 70.0,
                rh_warn_low: 30.0,
                rh_warn_high: 60.0,
                lux_crit: 200,
                lux_warn: 450,
                eco2_crit: 2680,
                eco2_warn: 2100,
                meas_t_ms: None,
                dht11_t_ms: None,
                bh1750_t_ms: None,
                ccs811_t_ms: None,
                output_t_ms: None,
            },
        );

        table
    }

    fn push(&mut self, name: &str, profile: Profile) {
        self.entries.push((name.to_string(), profile));
    }

    /// Get a profile by name.
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// Check if a profile exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All profile names, in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate over `(name, profile)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Profile)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Number of profiles in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_size() {
        let table = ProfileTable::builtin();
        assert_eq!(table.len(), 9);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_display_order() {
        let table = ProfileTable::builtin();
        let names: Vec<&str> = table.names().collect();
        assert_eq!(
            names,
            vec![
                "Default",
                "Aulas B",
                "Biblioteca",
                "Hogar Urbano",
                "Gimnasio/Entrenam.",
                "Quirófano/ICU/Radiolog.",
                "CSIC Aulas",
                "OMS Trabajo",
                "CDC EEUU",
            ]
        );
    }

    #[test]
    fn test_only_default_has_timers() {
        let table = ProfileTable::builtin();
        for (name, profile) in table.iter() {
            if name == "Default" {
                assert!(profile.has_timers());
            } else {
                assert!(!profile.has_timers(), "{} should not define timers", name);
            }
        }
    }

    #[test]
    fn test_default_timer_values() {
        let table = ProfileTable::builtin();
        let default = table.get("Default").unwrap();
        assert_eq!(default.meas_t_ms, Some(60000));
        assert_eq!(default.dht11_t_ms, Some(5000));
        assert_eq!(default.bh1750_t_ms, Some(5000));
        assert_eq!(default.ccs811_t_ms, Some(5000));
        assert_eq!(default.output_t_ms, Some(5000));
    }

    #[test]
    fn test_biblioteca_values() {
        let table = ProfileTable::builtin();
        let profile = table.get("Biblioteca").unwrap();
        assert_eq!(profile.temp_crit_low, 10.0);
        assert_eq!(profile.temp_crit_high, 38.5);
        assert_eq!(profile.temp_warn_low, 19.0);
        assert_eq!(profile.temp_warn_high, 33.0);
        assert_eq!(profile.rh_crit_low, 10.0);
        assert_eq!(profile.rh_crit_high, 86.5);
        assert_eq!(profile.rh_warn_low, 21.0);
        assert_eq!(profile.rh_warn_high, 75.0);
        assert_eq!(profile.lux_crit, 0);
        assert_eq!(profile.lux_warn, 400);
        assert_eq!(profile.eco2_crit, 4500);
        assert_eq!(profile.eco2_warn, 3000);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = ProfileTable::builtin();
        assert!(table.contains("CDC EEUU"));
        assert!(!table.contains("cdc eeuu"));
        assert!(table.get("Nonexistent").is_none());
    }

    #[test]
    fn test_names_with_special_characters() {
        let table = ProfileTable::builtin();
        assert!(table.contains("Gimnasio/Entrenam."));
        assert!(table.contains("Quirófano/ICU/Radiolog."));
    }
}
