pub mod gravatar;
pub mod initials;
