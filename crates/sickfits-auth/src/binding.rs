//! Auth binding.
//!
//! Names the list whose items are the principals, the field that identifies
//! a principal (`email`), the field that authenticates it (`password`), and
//! the fields accepted when the very first account is created. The binding
//! is built once at startup and checked against the schema before the
//! server starts.

use anyhow::{Context, bail};
use sickfits_models::{FieldKind, SchemaSet};

/// Fields accepted by the first-item bootstrap, which is only open while the
/// principal list is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitFirstItem {
    pub fields: Vec<&'static str>,
}

/// Fields of the principal item loaded into every session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDataSelection {
    pub list_key: &'static str,
    pub fields: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthBinding {
    pub list_key: &'static str,
    pub identity_field: &'static str,
    pub secret_field: &'static str,
    pub init_first_item: Option<InitFirstItem>,
    pub session_data: ItemDataSelection,
}

impl AuthBinding {
    // TODO: assign initial roles to the first item once a role list exists.
    pub fn sick_fits() -> Self {
        Self {
            list_key: "User",
            identity_field: "email",
            secret_field: "password",
            init_first_item: Some(InitFirstItem {
                fields: vec!["name", "email", "password"],
            }),
            session_data: ItemDataSelection {
                list_key: "User",
                fields: vec!["id"],
            },
        }
    }

    /// Checks every name in the binding against the schema.
    pub fn validate(&self, schema: &SchemaSet) -> anyhow::Result<()> {
        let list = schema
            .get(self.list_key)
            .with_context(|| format!("Auth list '{}' is not in the schema", self.list_key))?;

        let identity = list.field(self.identity_field).with_context(|| {
            format!(
                "Identity field '{}.{}' does not exist",
                self.list_key, self.identity_field
            )
        })?;
        if !identity.unique {
            bail!(
                "Identity field '{}.{}' must be unique",
                self.list_key,
                self.identity_field
            );
        }

        let secret = list.field(self.secret_field).with_context(|| {
            format!(
                "Secret field '{}.{}' does not exist",
                self.list_key, self.secret_field
            )
        })?;
        if secret.kind != FieldKind::Password {
            bail!(
                "Secret field '{}.{}' must be a password field",
                self.list_key,
                self.secret_field
            );
        }

        if let Some(init) = &self.init_first_item {
            for field in &init.fields {
                if !list.has_field(field) {
                    bail!(
                        "First item field '{}.{}' does not exist",
                        self.list_key,
                        field
                    );
                }
            }
        }

        if self.session_data.list_key != self.list_key {
            bail!(
                "Session data is selected from '{}' but sessions belong to '{}'",
                self.session_data.list_key,
                self.list_key
            );
        }
        for field in &self.session_data.fields {
            if !list.has_field(field) {
                bail!("Session data field '{}.{}' does not exist", self.list_key, field);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sick_fits_binding() {
        let binding = AuthBinding::sick_fits();
        assert_eq!(binding.list_key, "User");
        assert_eq!(binding.identity_field, "email");
        assert_eq!(binding.secret_field, "password");
        assert_eq!(
            binding.init_first_item.unwrap().fields,
            vec!["name", "email", "password"]
        );
    }

    #[test]
    fn test_validates_against_schema() {
        assert!(AuthBinding::sick_fits().validate(&SchemaSet::sick_fits()).is_ok());
    }

    #[test]
    fn test_unknown_list_rejected() {
        let binding = AuthBinding {
            list_key: "Customer",
            ..AuthBinding::sick_fits()
        };
        let err = binding.validate(&SchemaSet::sick_fits()).unwrap_err();
        assert!(err.to_string().contains("Customer"));
    }

    #[test]
    fn test_non_unique_identity_rejected() {
        let binding = AuthBinding {
            identity_field: "name",
            ..AuthBinding::sick_fits()
        };
        assert!(binding.validate(&SchemaSet::sick_fits()).is_err());
    }

    #[test]
    fn test_secret_must_be_password() {
        let binding = AuthBinding {
            secret_field: "name",
            ..AuthBinding::sick_fits()
        };
        let err = binding.validate(&SchemaSet::sick_fits()).unwrap_err();
        assert!(err.to_string().contains("password field"));
    }

    #[test]
    fn test_unknown_first_item_field_rejected() {
        let binding = AuthBinding {
            init_first_item: Some(InitFirstItem {
                fields: vec!["name", "email", "password", "role"],
            }),
            ..AuthBinding::sick_fits()
        };
        assert!(binding.validate(&SchemaSet::sick_fits()).is_err());
    }
}
