use serde::{Deserialize, Serialize};

// -------- REQUEST DTOs --------
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginUser {
    pub email: String,
    pub password: String, // Plain text
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub name: String,
    pub password: String, // Plain text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<NewClient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<serde_json::Value>,
}

/// Body of `POST /add-num/`; the backend adds `number` to its counter.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddNumBody {
    pub number: i32,
}

/// Client role details sent along with a registration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewClient {
    pub age: u8,
    pub gender: String,
    #[serde(rename = "phoneNum")]
    pub phone_num: String,
    pub interests: Vec<String>,
}

impl NewUser {
    /// Registration for a plain client account
    pub fn client(
        email: impl Into<String>,
        username: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
        client: NewClient,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            name: name.into(),
            password: password.into(),
            client: Some(client),
            employee: None,
            admin: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_client() -> NewClient {
        NewClient {
            age: 30,
            gender: "F".to_string(),
            phone_num: "555-0100".to_string(),
            interests: vec!["cpu".to_string()],
        }
    }

    #[test]
    fn new_user_omits_missing_roles() {
        let user = NewUser::client("a@b.io", "ana", "Ana", "Abcdef1!", sample_client());
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["client"]["phoneNum"], "555-0100");
        assert!(json.get("employee").is_none());
        assert!(json.get("admin").is_none());
    }

    #[test]
    fn add_num_body_is_a_plain_number_field() {
        let json = serde_json::to_value(AddNumBody { number: -4 }).unwrap();
        assert_eq!(json, serde_json::json!({ "number": -4 }));
    }
}
