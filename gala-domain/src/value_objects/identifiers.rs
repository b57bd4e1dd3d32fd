// Identifier value objects
// Ids are small monotonic integers assigned by the store; 0 means "unset"
// (the store assigns the next id on insert) or, for an attendee's
// registered event in the file format, "no specific event".

pub type UserId = u32;
pub type EventId = u32;
pub type AttendeeId = u32;
pub type ItemId = u32;
