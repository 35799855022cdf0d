pub mod percent_decode;
pub mod percent_encode;
