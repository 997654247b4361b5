//! Minimal / full parameter selection.
//!
//! Essential categories always take part. A non-essential category takes
//! part once it is requested through `modules` or one of its parameters has
//! been assigned, and then contributes all of its parameters.
//!
//! Output is ordered by category (enumeration order), then by insertion
//! order inside a category.

use super::Registry;
use crate::parameter::entity::Parameter;
use crate::schema::Category;

impl Registry {
    /// Whether `category` takes part in a filtered view.
    pub fn is_active(&self, category: Category, modules: &[Category]) -> bool {
        category.is_essential()
            || modules.contains(&category)
            || self.category(category).iter().any(|param| param.is_set())
    }

    /// Selected parameters paired with their category.
    ///
    /// With `is_minimal`, essential categories only contribute parameters
    /// that are assigned or required without default.
    pub fn filter_grouped(&self, is_minimal: bool, modules: &[Category]) -> Vec<(Category, &Parameter)> {
        self.categories()
            .filter(|category| self.is_active(*category, modules))
            .flat_map(|category| {
                let keep_all = !is_minimal || !category.is_essential();
                self.category(category)
                    .into_iter()
                    .filter(move |param| keep_all || param.is_minimal())
                    .map(move |param| (category, param))
            })
            .collect()
    }

    pub fn filter(&self, is_minimal: bool, modules: &[Category]) -> Vec<&Parameter> {
        self.filter_grouped(is_minimal, modules)
            .into_iter()
            .map(|(_, param)| param)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::parameter::entity::{Parameter, ParameterSpec};
    use crate::registry::{Registry, RegistryBuilder};
    use crate::schema::{Category, Datatype, Mask};

    fn registry() -> Registry {
        let mut builder = RegistryBuilder::new();
        for spec in [
            ParameterSpec::new("TIDE_FILE", Datatype::Path, Category::Tides),
            ParameterSpec::new("TOTAL_TIME", Datatype::Float, Category::Time)
                .required()
                .mask(Mask::PositiveDefinite),
            ParameterSpec::new("DX", Datatype::Float, Category::Grid)
                .required()
                .mask(Mask::PositiveDefinite),
            ParameterSpec::new("StretchGrid", Datatype::Bool, Category::Grid).default_value(false),
            ParameterSpec::new("DY", Datatype::Float, Category::Grid)
                .required()
                .mask(Mask::PositiveDefinite),
            ParameterSpec::new("HOT_START", Datatype::Bool, Category::HotStart)
                .default_value(false),
            ParameterSpec::new("FileNumber_HOTSTART", Datatype::Integer, Category::HotStart)
                .mask(Mask::Positive)
                .default_value(0),
        ] {
            builder.add(Parameter::new(spec).unwrap()).unwrap();
        }
        builder.link().unwrap()
    }

    fn names(params: &[&Parameter]) -> Vec<String> {
        params.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn test_minimal_keeps_required_without_default() {
        let registry = registry();
        let minimal = registry.filter(true, &[]);
        assert_eq!(names(&minimal), vec!["DX", "DY", "TOTAL_TIME"]);
        assert!(minimal.iter().all(|p| p.is_minimal()));
    }

    #[test]
    fn test_full_keeps_every_essential_parameter() {
        let registry = registry();
        let full = registry.filter(false, &[]);
        assert_eq!(names(&full), vec!["DX", "StretchGrid", "DY", "TOTAL_TIME"]);
    }

    #[test]
    fn test_module_activates_whole_category() {
        let registry = registry();
        let minimal = registry.filter(true, &[Category::HotStart]);
        assert_eq!(
            names(&minimal),
            vec!["DX", "DY", "TOTAL_TIME", "HOT_START", "FileNumber_HOTSTART"]
        );
    }

    #[test]
    fn test_assignment_activates_category() {
        let mut registry = registry();
        assert!(!registry.is_active(Category::Tides, &[]));
        registry.set("TIDE_FILE", "tides.txt").unwrap();
        assert!(registry.is_active(Category::Tides, &[]));

        let grouped = registry.filter_grouped(true, &[]);
        assert_eq!(grouped.last().map(|(c, p)| (*c, p.name())), Some((Category::Tides, "TIDE_FILE")));
    }

    #[test]
    fn test_assigned_optional_joins_minimal() {
        let mut registry = registry();
        registry.set("StretchGrid", true).unwrap();
        let minimal = registry.filter(true, &[]);
        assert_eq!(names(&minimal), vec!["DX", "StretchGrid", "DY", "TOTAL_TIME"]);
    }

    #[test]
    fn test_inactive_category_never_appears() {
        let registry = registry();
        for is_minimal in [true, false] {
            assert!(
                registry
                    .filter_grouped(is_minimal, &[])
                    .iter()
                    .all(|(category, _)| *category != Category::HotStart)
            );
        }
    }
}
