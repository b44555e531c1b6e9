//! GreenLane alternatives core.
//!
//! Decides, for a shopped product, which sustainable alternatives and tips to
//! show:
//! 1. **Classification** (`classify`) - product title to a category label
//! 2. **Eligibility** (`eligibility`) - skip classes with no greener substitute
//! 3. **Live search** (`search`) - pluggable similarity search seam
//! 4. **Fallback** (`fallback`) - curated catalog when live search is down
//!
//! `resolver` ties the stages together and `tips` supplies the advice shown
//! with the result. Nothing here performs network I/O.

pub mod classify;
pub mod config;
pub mod domain;
pub mod eligibility;
pub mod errors;
pub mod fallback;
pub mod resolver;
pub mod search;
pub mod tips;

pub use classify::{classify, Category};
pub use domain::alternatives::AlternativesResponse;
pub use domain::product::{CandidateId, EcoCandidate, SearchResult};
pub use domain::query::{ProductQuery, DEFAULT_LIMIT};
pub use domain::tip::SustainabilityTip;
pub use eligibility::is_limited;
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use fallback::fallback;
pub use resolver::{AlternativesResolver, ResolutionPath};
pub use search::{OfflineSearch, SearchUnavailable, SimilaritySearch};
pub use tips::tips_for;
