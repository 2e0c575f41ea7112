use crate::models::event::NewEvent;
use crate::storage::Storage;

/// The demo set shown on a fresh install.
fn demo_events() -> Vec<NewEvent> {
    vec![
        NewEvent {
            title: "Tech Taakra 2025".to_string(),
            description: "Annual flagship event featuring workshops, competitions, and tech \
                          talks from industry experts."
                .to_string(),
            date: "2025-03-15".to_string(),
            location: "GCU Main Auditorium".to_string(),
            image: Some("/assets/events/tech-taakra.png".to_string()),
            registration_link: Some("#".to_string()),
        },
        NewEvent {
            title: "AI Workshop Series".to_string(),
            description: "Learn the fundamentals of artificial intelligence and machine \
                          learning in this hands-on workshop series."
                .to_string(),
            date: "2025-02-20".to_string(),
            location: "Computer Lab 3".to_string(),
            image: Some("/assets/events/ai-workshop.png".to_string()),
            registration_link: Some("#".to_string()),
        },
        NewEvent {
            title: "Coding Bootcamp".to_string(),
            description: "Intensive coding bootcamp covering web development, algorithms, and \
                          software engineering principles."
                .to_string(),
            date: "2025-04-10".to_string(),
            location: "CS Department".to_string(),
            image: Some("/assets/events/coding-bootcamp.png".to_string()),
            registration_link: Some("#".to_string()),
        },
    ]
}

/// Inserts the demo events on first boot. Emptiness of the events table is
/// the only idempotency check, so a restart with existing events inserts
/// nothing.
pub async fn seed_demo_events(storage: &Storage) -> Result<(), sqlx::Error> {
    let existing = storage.events().await?;
    if !existing.is_empty() {
        return Ok(());
    }

    tracing::info!("No events found, seeding demo events");
    let demo = demo_events();
    let count = demo.len();
    for event in &demo {
        storage.create_event(event).await?;
    }
    tracing::info!(count, "Demo events seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_set_is_fixed_and_valid() {
        let demo = demo_events();
        assert_eq!(demo.len(), 3);
        for event in &demo {
            assert!(event.validate().is_ok());
        }
    }

    #[test]
    fn demo_titles_are_distinct() {
        let demo = demo_events();
        let mut titles: Vec<_> = demo.iter().map(|e| e.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), demo.len());
    }
}
