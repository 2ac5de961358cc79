pub mod cards;
pub mod checkins;
pub mod competitions;
pub mod matches;
pub mod media;
pub mod news;
pub mod partners;
pub mod players;
pub mod tickets;
pub mod users;
