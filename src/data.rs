//! Static sample data shown by the panel.
//!
//! Nothing here is loaded from disk or the network; every screen renders
//! these fixtures.

/// A single event request shown in the events table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Stable id, unique within the session.
    pub id: u32,
    pub event_name: String,
    pub event_start: String,
    pub event_end: String,
    pub client_name: String,
    pub contact_info: String,
    pub venue: String,
}

impl EventRecord {
    fn new(
        id: u32,
        event_name: &str,
        event_start: &str,
        event_end: &str,
        client_name: &str,
        contact_info: &str,
        venue: &str,
    ) -> Self {
        Self {
            id,
            event_name: event_name.to_string(),
            event_start: event_start.to_string(),
            event_end: event_end.to_string(),
            client_name: client_name.to_string(),
            contact_info: contact_info.to_string(),
            venue: venue.to_string(),
        }
    }
}

/// The seven event requests listed on the events screen.
pub fn sample_events() -> Vec<EventRecord> {
    vec![
        EventRecord::new(
            1,
            "Filled Name",
            "Jan 12, 2024",
            "Jan 14, 2024",
            "Muhammad Asad",
            "+1 234 566 7890",
            "Lorem Ipsum Dolor Sit Amet",
        ),
        EventRecord::new(
            2,
            "Product Launch",
            "Feb 03, 2024",
            "Feb 04, 2024",
            "Sara Khan",
            "+1 234 566 1200",
            "Harbor Convention Center",
        ),
        EventRecord::new(
            3,
            "Annual Gala",
            "Mar 21, 2024",
            "Mar 21, 2024",
            "Ali Raza",
            "+1 234 566 3311",
            "Grand Ballroom",
        ),
        EventRecord::new(
            4,
            "Board Meeting",
            "Jan 12, 2024",
            "Jan 12, 2024",
            "Muhammad Asad",
            "+1 234 566 7890",
            "Meeting Room 2",
        ),
        EventRecord::new(
            5,
            "Developer Summit",
            "Apr 08, 2024",
            "Apr 10, 2024",
            "Sara Khan",
            "+1 234 566 1200",
            "Tech Park Hall A",
        ),
        EventRecord::new(
            6,
            "Charity Run",
            "May 15, 2024",
            "May 15, 2024",
            "Muhammad Asad",
            "+1 234 566 7890",
            "City Waterfront",
        ),
        EventRecord::new(
            7,
            "Workshop",
            "Jun 02, 2024",
            "Jun 03, 2024",
            "Zara Malik",
            "+1 234 566 4455",
            "Lorem Ipsum Dolor Sit Amet",
        ),
    ]
}

/// Coordinators offered by the assignment picker. Index 0 means none chosen.
pub const COORDINATORS: [&str; 3] = ["Search Coordinator", "John Doe", "Jane Smith"];

/// Contractors offered per position row.
pub const CONTRACTORS: [&str; 3] = ["Select Contractor", "Contractor 1", "Contractor 2"];

/// A meeting room that can be staffed by a contractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRoom {
    pub id: u32,
    pub name: String,
    pub positions: u32,
    pub start_date: String,
    pub end_date: String,
    pub featured: bool,
}

pub fn meeting_rooms() -> Vec<MeetingRoom> {
    (1..=5)
        .map(|id| MeetingRoom {
            id,
            name: format!("Meeting Room {}", id),
            positions: 12,
            start_date: "12 Jan, 2023".to_string(),
            end_date: "15 Jan, 2023".to_string(),
            featured: id == 1,
        })
        .collect()
}

/// A staffed position at an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub id: u32,
    pub position: String,
    pub time: String,
    pub info: String,
    pub quantity: u32,
}

pub fn positions() -> Vec<Position> {
    (1..=8)
        .map(|id| Position {
            id,
            position: "Camera 1 (Video)".to_string(),
            time: "9 am - 7 pm".to_string(),
            info: "LP default".to_string(),
            quantity: 20,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_event_ids_are_unique_and_ordered() {
        let events = sample_events();
        assert_eq!(events.len(), 7);
        let ids: Vec<u32> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_only_first_room_is_featured() {
        let rooms = meeting_rooms();
        assert_eq!(rooms.len(), 5);
        assert!(rooms[0].featured);
        assert!(rooms[1..].iter().all(|r| !r.featured));
    }
}
