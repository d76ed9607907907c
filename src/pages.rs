//! Static page content the motion layer needs: which elements reveal, how, and where they sit.

pub mod booking;
pub mod catalog;

pub use booking::{BookingDraft, BookingField, BookingFlow, BookingRequest, BookingView, FocusArea};
pub use catalog::{PageDescriptor, PageLayout, RevealDescriptor, ScrubDescriptor, TriggerKind, page};
