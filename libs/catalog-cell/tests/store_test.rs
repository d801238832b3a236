use uuid::Uuid;

use catalog_cell::store::CatalogStore;

#[test]
fn seeded_catalog_carries_reference_data() {
    let catalog = CatalogStore::seeded();

    let specialties = catalog.list_specialties();
    let practitioners = catalog.list_practitioners();

    assert_eq!(specialties.len(), 6);
    assert_eq!(practitioners.len(), 7);

    // every practitioner belongs to exactly one known specialty
    for practitioner in &practitioners {
        assert!(catalog.specialty(practitioner.specialty_id).is_some());
    }
}

#[test]
fn practitioners_filter_by_specialty() {
    let catalog = CatalogStore::seeded();

    let cardiology = catalog
        .list_specialties()
        .into_iter()
        .find(|s| s.name == "Cardiology")
        .unwrap();

    let cardiologists = catalog.practitioners_by_specialty(cardiology.id);
    assert_eq!(cardiologists.len(), 2);
    assert!(cardiologists
        .iter()
        .all(|p| p.specialty_id == cardiology.id));
}

#[test]
fn unknown_specialty_yields_empty_not_error() {
    let catalog = CatalogStore::seeded();

    assert!(catalog
        .practitioners_by_specialty(Uuid::new_v4())
        .is_empty());
}

#[test]
fn lookups_by_id() {
    let catalog = CatalogStore::seeded();

    let practitioner = catalog.list_practitioners().remove(0);
    assert_eq!(
        catalog.practitioner(practitioner.id).unwrap().name,
        practitioner.name
    );

    assert!(catalog.practitioner(Uuid::new_v4()).is_none());
    assert!(catalog.specialty(Uuid::new_v4()).is_none());
}
