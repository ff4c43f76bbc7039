use failure::Fail;

#[derive(Debug, Fail)]
pub enum SentimentError {
    #[fail(display = "Invalid input: {}", _0)]
    InvalidInput(String),
    #[fail(display = "Unknown hotel: '{}'", _0)]
    UnknownHotel(String),
    #[fail(display = "Unable to load model artifact '{}'", _0)]
    ModelLoad(String),
    #[fail(display = "Expected model version {} but found {}", _1, _0)]
    WrongModelVersion(String, &'static str),
}

pub type Result<T> = ::std::result::Result<T, ::failure::Error>;
