//! Contact form state. Submission is local only: nothing is sent anywhere,
//! the visitor just gets an acknowledgement and a cleared form.

pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! I will get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Form control `id`/`name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgement;

impl Acknowledgement {
    pub fn message(&self) -> &'static str {
        ACKNOWLEDGEMENT
    }
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.into_iter().all(|f| self.get(f).is_empty())
    }

    /// Acknowledges the message and resets every field. Required-field checks
    /// are left to the browser's form validation.
    pub fn submit(&mut self) -> Acknowledgement {
        log::info!(
            "contact form acknowledged (name: {} chars, email: {} chars, message: {} chars)",
            self.name.chars().count(),
            self.email.chars().count(),
            self.message.chars().count(),
        );
        *self = ContactForm::default();
        Acknowledgement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_clears_fields() {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "A");
        form.set(ContactField::Email, "a@b.com");
        form.set(ContactField::Message, "hi");
        assert_eq!(form.get(ContactField::Email), "a@b.com");
        assert!(!form.is_empty());

        let ack = form.submit();
        assert_eq!(ack.message(), ACKNOWLEDGEMENT);
        assert_eq!(form, ContactForm::default());
        assert!(form.is_empty());
    }

    #[test]
    fn test_fields_are_independent() {
        let mut form = ContactForm::default();
        form.set(ContactField::Message, "hello");
        form.set(ContactField::Message, "hello there");
        assert_eq!(form.message, "hello there");
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
    }

    #[test]
    fn test_field_keys() {
        let keys: Vec<_> = ContactField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, ["name", "email", "message"]);
    }
}
