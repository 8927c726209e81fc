//! Domain entities: parsed referrers, traffic types, and attribution records.

mod engagement;
mod referrer;
mod traffic_type;
mod urs_record;

pub use engagement::EngagementStatus;
pub use referrer::ParsedReferrer;
pub use traffic_type::TrafficType;
pub use urs_record::UrsRecord;
