//! First-boot content.
//!
//! [`seed_if_empty`] is called once at process start. It is gated on the
//! number of services already stored, so running it against a database that
//! holds any service is a no-op. Rows are written through [`Storage`]
//! directly and do not pass through request validation.
//!
//! Each insert is its own statement. If a run fails after the services are
//! written but before the projects are, later runs see services and skip,
//! leaving the project catalogue empty until it is filled by hand.

use chantier_core::schema::{NewProject, NewService};

use crate::storage::Storage;

/// What the seed routine did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { services: usize, projects: usize },
    Skipped { existing_services: usize },
}

/// Insert the default services and projects if no service exists yet.
pub async fn seed_if_empty<S>(storage: &S) -> Result<SeedOutcome, sqlx::Error>
where
    S: Storage + ?Sized,
{
    let existing_services = storage.list_services().await?.len();
    if existing_services > 0 {
        tracing::info!(existing_services, "Services present, skipping seed");
        return Ok(SeedOutcome::Skipped { existing_services });
    }

    let services = default_services();
    for service in &services {
        let created = storage.create_service(service).await?;
        tracing::debug!(service_id = created.id, title = %created.title, "Seeded service");
    }

    let projects = default_projects();
    for project in &projects {
        let created = storage.create_project(project).await?;
        tracing::debug!(project_id = created.id, title = %created.title, "Seeded project");
    }

    tracing::info!(
        services = services.len(),
        projects = projects.len(),
        "Seeded default content",
    );

    Ok(SeedOutcome::Seeded {
        services: services.len(),
        projects: projects.len(),
    })
}

pub fn default_services() -> Vec<NewService> {
    vec![
        NewService {
            title: "General Contracting".to_string(),
            description: "Full-service project management from concept to completion."
                .to_string(),
            icon: "Hammer".to_string(),
        },
        NewService {
            title: "Renovations".to_string(),
            description: "Transforming existing spaces into modern, functional environments."
                .to_string(),
            icon: "Home".to_string(),
        },
        NewService {
            title: "Custom Homes".to_string(),
            description: "Building bespoke homes tailored to your lifestyle and vision."
                .to_string(),
            icon: "Ruler".to_string(),
        },
    ]
}

pub fn default_projects() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "Modern Kitchen Remodel".to_string(),
            description: "Complete renovation of a dated kitchen into a modern chef's paradise \
                          with custom cabinetry and quartz countertops."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1556911220-bff31c812dba?auto=format&fit=crop&q=80&w=2768&ixlib=rb-4.0.3"
                .to_string(),
            category: "Renovation".to_string(),
            location: Some("Downtown".to_string()),
            completion_date: Some("2023".to_string()),
        },
        NewProject {
            title: "Lakeside Custom Home".to_string(),
            description: "Design and build of a 3,500 sq ft luxury home with panoramic lake \
                          views and sustainable features."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1600596542815-e32c530480b7?auto=format&fit=crop&q=80&w=2600&ixlib=rb-4.0.3"
                .to_string(),
            category: "New Build".to_string(),
            location: Some("Lakeview".to_string()),
            completion_date: Some("2024".to_string()),
        },
        NewProject {
            title: "Heritage Restoration".to_string(),
            description: "Careful restoration of a century-old property, preserving original \
                          details while updating systems."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?auto=format&fit=crop&q=80&w=2600&ixlib=rb-4.0.3"
                .to_string(),
            category: "Restoration".to_string(),
            location: Some("Old Town".to_string()),
            completion_date: Some("2023".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_matches_catalogue() {
        let services = default_services();
        let pairs: Vec<(&str, &str)> = services
            .iter()
            .map(|s| (s.title.as_str(), s.icon.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("General Contracting", "Hammer"),
                ("Renovations", "Home"),
                ("Custom Homes", "Ruler"),
            ]
        );

        let projects = default_projects();
        let pairs: Vec<(&str, &str)> = projects
            .iter()
            .map(|p| (p.title.as_str(), p.category.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Modern Kitchen Remodel", "Renovation"),
                ("Lakeside Custom Home", "New Build"),
                ("Heritage Restoration", "Restoration"),
            ]
        );
    }

    #[test]
    fn default_content_has_no_empty_required_text() {
        for s in default_services() {
            assert!(!s.title.is_empty() && !s.description.is_empty() && !s.icon.is_empty());
        }
        for p in default_projects() {
            assert!(!p.title.is_empty() && !p.description.is_empty());
            assert!(p.image_url.starts_with("https://"));
        }
    }
}
