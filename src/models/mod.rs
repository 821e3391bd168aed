pub mod invitation;

pub use invitation::{
    DispatchDetails, DispatchOutcome, InvitationRequest, InvitationResponse,
};
