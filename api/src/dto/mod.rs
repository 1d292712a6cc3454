//! Request and response data transfer objects

pub mod students;

pub use students::{
    RegisterRequest, RegisterResponse, SetNameRequest, SetNameResponse, VerifyOtpRequest,
    VerifyOtpResponse,
};
