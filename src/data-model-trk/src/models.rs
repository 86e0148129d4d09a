use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An authenticated account holder who manages groups.
///
/// Created on registration, read on login and dashboard, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainer {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    /// Bcrypt hash; never the plaintext password.
    pub password_hash: String,
    pub name: String,
    pub api_key: String,
    /// Names of the groups owned by this trainer. Documents written before
    /// the field existed load as empty.
    #[serde(default)]
    pub groups: Vec<String>,
}

impl Trainer {
    /// A freshly registered trainer owns no groups.
    pub fn new(email: String, password_hash: String, name: String, api_key: String) -> Self {
        Self {
            id: None,
            email,
            password_hash,
            name,
            api_key,
            groups: Vec::new(),
        }
    }
}

/// A named collection of students (by remote account ID) and assignments.
///
/// Created on group registration, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub group_name: String,
    /// Remote-platform account IDs, in submission order.
    pub student_list: Vec<String>,
    pub assignment_list: Vec<String>,
}

impl Group {
    /// A new group starts with no assignments.
    pub fn new(group_name: String, student_list: Vec<String>) -> Self {
        Self {
            id: None,
            group_name,
            student_list,
            assignment_list: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, to_document};

    #[test]
    fn test_new_trainer_has_no_groups() {
        let trainer = Trainer::new(
            "ash@example.com".to_string(),
            "$2b$12$not-a-real-hash".to_string(),
            "Ash".to_string(),
            "key-123".to_string(),
        );
        assert!(trainer.id.is_none());
        assert!(trainer.groups.is_empty());
    }

    #[test]
    fn test_unsaved_trainer_serializes_without_id() {
        let trainer = Trainer::new(
            "ash@example.com".to_string(),
            "hash".to_string(),
            "Ash".to_string(),
            "key".to_string(),
        );
        let document = to_document(&trainer).unwrap();
        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("email").unwrap(), "ash@example.com");
    }

    #[test]
    fn test_trainer_documents_without_groups_field_load() {
        let document = doc! {
            "_id": ObjectId::new(),
            "email": "misty@example.com",
            "password_hash": "hash",
            "name": "Misty",
            "api_key": "key",
        };
        let trainer: Trainer = from_document(document).unwrap();
        assert!(trainer.id.is_some());
        assert!(trainer.groups.is_empty());
    }

    #[test]
    fn test_new_group_has_empty_assignment_list() {
        let group = Group::new(
            "starters".to_string(),
            vec!["101".to_string(), "102".to_string()],
        );
        assert!(group.assignment_list.is_empty());
        assert_eq!(group.student_list, vec!["101", "102"]);
    }
}
