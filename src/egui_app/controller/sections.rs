use super::*;

impl Controller {
    /// Switches the visible section and refreshes its data from the backend.
    pub fn activate(&mut self, section: Section) {
        self.ui.section = section;
        match section {
            Section::Dashboard => self.refresh_dashboard(),
            Section::DataObjects => self.refresh_objects(),
            Section::Threats => self.refresh_threats(),
            Section::Weights => self.refresh_weights(),
            Section::Rules => self.refresh_rules(),
            Section::Events => self.refresh_events(),
            Section::Assessment => {}
        }
    }

    /// Activates the section with the given id. Unknown ids are ignored.
    pub fn activate_by_id(&mut self, id: &str) {
        if let Some(section) = Section::from_id(id) {
            self.activate(section);
        }
    }
}
