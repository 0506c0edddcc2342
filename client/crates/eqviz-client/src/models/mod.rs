pub(crate) mod auth_response;
pub(crate) mod credentials;
pub(crate) mod dataset;
pub(crate) mod decimal;
pub(crate) mod message_response;
pub(crate) mod registration_input;
pub(crate) mod summary;
pub(crate) mod upload_response;
pub(crate) mod user_profile;

pub use auth_response::AuthResponse;
pub use credentials::Credentials;
pub use dataset::{DatasetDetail, DatasetList, DatasetListItem, EquipmentRecord};
pub use message_response::MessageResponse;
pub use registration_input::RegistrationInput;
pub use summary::{
    Averages, DatasetSummary, Statistics, TypeDistribution, TypeShare, TypeStats, ValueRange,
    ValueRanges,
};
pub use upload_response::UploadResponse;
pub use user_profile::UserProfile;
