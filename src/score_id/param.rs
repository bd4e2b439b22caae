use rocket::request::FromParam;

use super::ScoreId;

impl<'r> FromParam<'r> for ScoreId {
    type Error = std::convert::Infallible;

    fn from_param(param: &'r str) -> Result<Self, Self::Error> {
        Ok(Self(param.to_owned()))
    }
}
