//! DTOs de conductores
//! 
//! Los conductores son usuarios con role DRIVER; estas requests
//! manejan además los campos de perfil (licencia, teléfono, etc).

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 72))]
    pub password: Option<String>,

    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub status: Option<String>,
    pub joined_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub status: Option<String>,
    pub joined_date: Option<NaiveDate>,
    pub avatar_url: Option<String>,
}
