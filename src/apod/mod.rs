/// Data layer: the APOD feed, its records and the date sampler.
///
/// Architecture:
/// ```text
///   sample_date()            random day in [1995-06-16, today]
///        │
///        ▼
///   ┌──────────┐
///   │  client   │  GET /planetary/apod?date=… → ApodRecord
///   └──────────┘
///        │  media_type == image
///        ▼
///   ┌──────────┐
///   │  client   │  GET record.url → raw image bytes
///   └──────────┘
///        │
///        ▼
///     imaging      decode + fit into the display box
/// ```

pub mod client;
pub mod date;
pub mod error;
pub mod model;
