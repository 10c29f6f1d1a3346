//! Compiled-in gallery content.
//!
//! This is the catalog the page ships with. Edit it here; the curated default
//! titles in [`reference_layout`] must keep pointing at titles below.

use pf_core::ports::{CatalogSourceError, CatalogSourcePort};
use pf_core::project::{CatalogLayout, DisclosureLabels, ProjectRecord};

pub const REFERENCE_PRIORITY_TAGS: &[&str] = &["AI/ML", "Healthcare", "Full-Stack", "Mobile"];

pub const REFERENCE_DEFAULT_TITLES: &[&str] =
    &["Brody Cafe App", "SoleSense", "PlatePal", "SRT Controller"];

pub struct ReferenceCatalogSource;

impl CatalogSourcePort for ReferenceCatalogSource {
    fn describe(&self) -> String {
        "compiled-in reference catalog".to_string()
    }

    fn load(&self) -> Result<Vec<ProjectRecord>, CatalogSourceError> {
        Ok(reference_records())
    }
}

pub fn reference_layout() -> CatalogLayout {
    CatalogLayout {
        priority_tags: REFERENCE_PRIORITY_TAGS.iter().map(|t| t.to_string()).collect(),
        default_titles: REFERENCE_DEFAULT_TITLES.iter().map(|t| t.to_string()).collect(),
        labels: DisclosureLabels::default(),
    }
}

pub fn reference_records() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord::new(
            "Brody Cafe App",
            "Mobile ordering for the Brody Learning Commons cafe with menu browsing and pickup alerts.",
        )
        .with_tags(["Mobile", "React Native", "Full-Stack"])
        .with_image("/projects/brody-cafe.png"),
        ProjectRecord::new(
            "SoleSense",
            "Pressure-sensing insole that flags gait changes linked to diabetic foot ulcers.",
        )
        .with_tags(["Healthcare", "Embedded", "Hardware"])
        .with_image("/projects/solesense.png"),
        ProjectRecord::new("PlatePal", "A nutrition and meal planning app.")
            .with_tags(["Mobile", "Full-Stack"])
            .with_link("GitHub", "https://github.com/tranade/platepal")
            .with_link("Live Demo", "#"),
        ProjectRecord::new(
            "SRT Controller",
            "Real-time joystick controller for a teleoperated robot arm with force limits.",
        )
        .with_tags(["Robotics", "C/C++", "Embedded"]),
        ProjectRecord::new(
            "MindMatch",
            "Pairs students with peer mental health resources after a short check-in.",
        )
        .with_tags(["AI/ML", "Healthcare"]),
        ProjectRecord::new(
            "InFluo",
            "Forecasts regional influenza activity from public health signals.",
        )
        .with_tags(["AI/ML", "Data Science", "Healthcare"])
        .with_image("/projects/influo.png"),
        ProjectRecord::new(
            "iMEDS",
            "Medication reminders and an adherence dashboard for caregivers.",
        )
        .with_tags(["Healthcare", "Mobile"]),
        ProjectRecord::new("TerraVision", "A full-stack mapping and visualization tool.")
            .with_tags(["Full-Stack", "Data Science"])
            .with_link("Backend", "#")
            .with_link("Frontend", "#"),
    ]
}
