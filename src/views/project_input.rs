use tracing::info;

use super::InputField;
use crate::error::{Error, Result};
use crate::project::ProjectId;
use crate::state::ProjectState;
use crate::validation::{Validatable, validate};

pub const MIN_TEXT_LENGTH: usize = 3;
pub const MIN_PEOPLE: i64 = 1;
pub const MAX_PEOPLE: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Description, FormField::People];

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::People,
            FormField::People => FormField::Title,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::People,
            FormField::Description => FormField::Title,
            FormField::People => FormField::Description,
        }
    }
}

/// The new-project form.
#[derive(Debug, Clone)]
pub struct ProjectInput {
    title: InputField,
    description: InputField,
    people: InputField,
    focused: FormField,
}

impl Default for ProjectInput {
    fn default() -> Self {
        Self {
            title: InputField::new("Title"),
            description: InputField::new("Description"),
            people: InputField::new("People"),
            focused: FormField::Title,
        }
    }
}

impl ProjectInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(&self, field: FormField) -> &InputField {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut InputField {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    #[must_use]
    pub fn focused(&self) -> FormField {
        self.focused
    }

    pub fn focused_field_mut(&mut self) -> &mut InputField {
        self.field_mut(self.focused)
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = field;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Trims and validates all three fields. Title and description need at
    /// least three characters; people must be a whole number from 1 to 5.
    pub fn gather_user_input(&self) -> Result<(String, String, u8)> {
        let title = self.title.content().trim();
        let description = self.description.content().trim();
        let people_text = self.people.content().trim();

        let title_ok = validate(
            &Validatable::text(title)
                .required()
                .min_length(MIN_TEXT_LENGTH),
        );
        let description_ok = validate(
            &Validatable::text(description)
                .required()
                .min_length(MIN_TEXT_LENGTH),
        );
        let people = validate(&Validatable::text(people_text).required())
            .then(|| people_text.parse::<i64>().ok())
            .flatten()
            .filter(|&n| {
                validate(
                    &Validatable::number(n)
                        .required()
                        .min(MIN_PEOPLE)
                        .max(MAX_PEOPLE),
                )
            })
            .and_then(|n| u8::try_from(n).ok());

        match people {
            Some(people) if title_ok && description_ok => {
                Ok((title.to_string(), description.to_string(), people))
            }
            _ => {
                info!(title_ok, description_ok, people = people_text, "project input rejected");
                Err(Error::InvalidInput)
            }
        }
    }

    /// Adds the project and clears the form. On invalid input nothing is
    /// added and the fields keep what the user typed.
    pub fn submit(&mut self, store: &mut ProjectState) -> Result<ProjectId> {
        let (title, description, people) = self.gather_user_input()?;
        let id = store.add_project(&title, &description, people);
        self.clear();
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
        self.focused = FormField::Title;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectStatus;

    fn filled(title: &str, description: &str, people: &str) -> ProjectInput {
        let mut input = ProjectInput::new();
        input.field_mut(FormField::Title).set_content(title);
        input.field_mut(FormField::Description).set_content(description);
        input.field_mut(FormField::People).set_content(people);
        input
    }

    #[test]
    fn valid_submit_adds_active_project_and_clears() {
        let mut store = ProjectState::new();
        let mut input = filled("  Build API ", "Backend work", " 3 ");

        let id = input.submit(&mut store).expect("valid input");

        let project = store.get(&id).expect("project stored");
        assert_eq!(project.title, "Build API");
        assert_eq!(project.people, 3);
        assert_eq!(project.status, ProjectStatus::Active);
        for field in FormField::ALL {
            assert!(input.field(field).is_empty());
        }
    }

    #[test]
    fn invalid_inputs_add_nothing_and_keep_fields() {
        let cases = [
            ("", "Backend work", "3"),
            ("Build API", "ab", "3"),
            ("Build API", "Backend work", "0"),
            ("Build API", "Backend work", "6"),
            ("Build API", "Backend work", ""),
            ("Build API", "Backend work", "two"),
            ("Build API", "Backend work", "2.5"),
            ("Build API", "Backend work", "-1"),
        ];

        for (title, description, people) in cases {
            let mut store = ProjectState::new();
            let mut input = filled(title, description, people);

            let result = input.submit(&mut store);

            assert!(
                matches!(result, Err(Error::InvalidInput)),
                "{title:?} {description:?} {people:?}"
            );
            assert!(store.is_empty());
            assert_eq!(input.field(FormField::Title).content(), title);
            assert_eq!(input.field(FormField::Description).content(), description);
            assert_eq!(input.field(FormField::People).content(), people);
        }
    }

    #[test]
    fn people_bounds_are_inclusive() {
        for people in ["1", "5"] {
            let input = filled("Title", "Description", people);
            assert!(input.gather_user_input().is_ok());
        }
    }

    #[test]
    fn focus_cycles_through_fields() {
        let mut input = ProjectInput::new();
        assert_eq!(input.focused(), FormField::Title);
        input.focus_next();
        input.focus_next();
        assert_eq!(input.focused(), FormField::People);
        input.focus_next();
        assert_eq!(input.focused(), FormField::Title);
        input.focus_prev();
        assert_eq!(input.focused(), FormField::People);
    }
}
