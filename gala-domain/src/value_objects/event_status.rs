// Event status value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Canceled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Ongoing => "Ongoing",
            EventStatus::Completed => "Completed",
            EventStatus::Canceled => "Canceled",
        }
    }

    /// Stable ordinal used by the record codec.
    pub fn ordinal(&self) -> u32 {
        match self {
            EventStatus::Upcoming => 0,
            EventStatus::Ongoing => 1,
            EventStatus::Completed => 2,
            EventStatus::Canceled => 3,
        }
    }

    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        match ordinal {
            0 => Some(EventStatus::Upcoming),
            1 => Some(EventStatus::Ongoing),
            2 => Some(EventStatus::Completed),
            3 => Some(EventStatus::Canceled),
            _ => None,
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "upcoming" => Some(EventStatus::Upcoming),
            "ongoing" => Some(EventStatus::Ongoing),
            "completed" => Some(EventStatus::Completed),
            "canceled" | "cancelled" => Some(EventStatus::Canceled),
            _ => None,
        }
    }
}
