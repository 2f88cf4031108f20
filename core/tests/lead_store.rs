use dealer_core::{
    contact::ContactRequest,
    store::{LeadRecord, LeadStore},
};

fn store() -> LeadStore {
    let store = LeadStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store
}

fn lead(name: &str, received_at: &str) -> LeadRecord {
    let mut record = LeadRecord::new(
        &ContactRequest {
            name:    name.into(),
            email:   format!("{name}@example.jp"),
            message: "test drive".into(),
        },
        true,
        None,
    );
    record.received_at = received_at.into();
    record
}

#[test]
fn migrate_is_idempotent() {
    let store = store();
    store.migrate().expect("second migration");
    assert_eq!(store.lead_count().unwrap(), 0);
}

#[test]
fn recent_leads_newest_first_and_limited() {
    let store = store();
    store.record_lead(&lead("a", "2026-01-01T09:00:00.000Z")).unwrap();
    store.record_lead(&lead("c", "2026-03-01T09:00:00.000Z")).unwrap();
    store.record_lead(&lead("b", "2026-02-01T09:00:00.000Z")).unwrap();

    let leads = store.recent_leads(2).unwrap();
    let names: Vec<&str> = leads.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["c", "b"]);
    assert_eq!(store.lead_count().unwrap(), 3);
}

#[test]
fn record_round_trips_all_fields() {
    let store = store();
    let mut original = lead("tanaka", "2026-04-01T10:30:00.000Z");
    original.delivered = false;
    original.error = Some("Mail provider rejected message: status 401".into());
    store.record_lead(&original).unwrap();

    let loaded = store.recent_leads(1).unwrap();
    assert_eq!(loaded, vec![original]);
}

#[test]
fn new_records_get_unique_ids() {
    let a = lead("x", "2026-01-01T00:00:00.000Z");
    let b = lead("x", "2026-01-01T00:00:00.000Z");
    assert_ne!(a.lead_id, b.lead_id);
    assert!(uuid_like(&a.lead_id));
}

fn uuid_like(id: &str) -> bool {
    id.len() == 36 && id.chars().filter(|c| *c == '-').count() == 4
}
