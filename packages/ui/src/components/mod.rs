//! Small presentational building blocks shared by every view.

mod badge;
mod button;
mod card;
mod feedback;
mod input;
mod tabs;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use card::{Card, StatCard};
pub use feedback::{EmptyState, ErrorState, LoadingState};
pub use input::{Input, Label, SearchInput};
pub use tabs::{TabItem, Tabs};
