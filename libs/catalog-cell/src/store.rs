use tracing::info;
use uuid::Uuid;

use crate::models::{Practitioner, Specialty};

/// Read-only catalog of specialties and practitioners. Seeded once at
/// startup, never mutated afterwards, so lookups need no locking.
#[derive(Debug)]
pub struct CatalogStore {
    specialties: Vec<Specialty>,
    practitioners: Vec<Practitioner>,
}

impl CatalogStore {
    pub fn new(specialties: Vec<Specialty>, practitioners: Vec<Practitioner>) -> Self {
        Self {
            specialties,
            practitioners,
        }
    }

    /// Build the catalog from the clinic's reference data set.
    pub fn seeded() -> Self {
        let specialty_names = [
            "Cardiology",
            "Dermatology",
            "Pediatrics",
            "Gynecology",
            "Ophthalmology",
            "Traumatology",
        ];

        let specialties: Vec<Specialty> = specialty_names
            .iter()
            .map(|name| Specialty {
                id: Uuid::new_v4(),
                name: name.to_string(),
            })
            .collect();

        // (name, specialty index). Cardiology carries two practitioners,
        // the remaining specialties one each.
        let practitioner_seed = [
            ("Dr. Carlos Gutierrez", 0),
            ("Dr. Laura Martinez", 0),
            ("Dr. Miguel Sanchez", 1),
            ("Dr. Ana Lopez", 2),
            ("Dr. Roberto Fernandez", 3),
            ("Dr. Julia Garcia", 4),
            ("Dr. Eduardo Torres", 5),
        ];

        let practitioners: Vec<Practitioner> = practitioner_seed
            .iter()
            .map(|(name, specialty_idx)| Practitioner {
                id: Uuid::new_v4(),
                name: name.to_string(),
                specialty_id: specialties[*specialty_idx].id,
            })
            .collect();

        info!(
            "Seeded catalog with {} specialties and {} practitioners",
            specialties.len(),
            practitioners.len()
        );

        Self::new(specialties, practitioners)
    }

    pub fn list_specialties(&self) -> Vec<Specialty> {
        self.specialties.clone()
    }

    pub fn list_practitioners(&self) -> Vec<Practitioner> {
        self.practitioners.clone()
    }

    /// Unknown specialty ids yield an empty list, not an error.
    pub fn practitioners_by_specialty(&self, specialty_id: Uuid) -> Vec<Practitioner> {
        self.practitioners
            .iter()
            .filter(|p| p.specialty_id == specialty_id)
            .cloned()
            .collect()
    }

    pub fn specialty(&self, id: Uuid) -> Option<Specialty> {
        self.specialties.iter().find(|s| s.id == id).cloned()
    }

    pub fn practitioner(&self, id: Uuid) -> Option<Practitioner> {
        self.practitioners.iter().find(|p| p.id == id).cloned()
    }
}
