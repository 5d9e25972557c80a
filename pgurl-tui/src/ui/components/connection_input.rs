use pgurl_core::{ConnectionFields, FieldKind};

#[derive(Clone, Debug)]
pub struct ConnectionInput {
    pub fields: ConnectionFields,
    pub current_field: FieldKind,
}

impl ConnectionInput {
    pub fn new(fields: ConnectionFields) -> Self {
        Self {
            fields,
            current_field: FieldKind::Host,
        }
    }

    pub fn current_value(&self) -> &str {
        self.fields.get(self.current_field)
    }

    pub fn push_char(&mut self, c: char) {
        self.fields.get_mut(self.current_field).push(c);
    }

    pub fn pop_char(&mut self) {
        self.fields.get_mut(self.current_field).pop();
    }

    pub fn clear_current(&mut self) {
        self.fields.get_mut(self.current_field).clear();
    }

    pub fn focus_next(&mut self) {
        self.current_field = self.current_field.next();
    }

    pub fn focus_previous(&mut self) {
        self.current_field = self.current_field.previous();
    }

    pub fn cycle_next(&mut self) {
        self.current_field = self.current_field.cycle_next();
    }

    pub fn cycle_previous(&mut self) {
        self.current_field = self.current_field.cycle_previous();
    }
}
