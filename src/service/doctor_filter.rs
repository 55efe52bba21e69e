use crate::models::doctor::Doctor;

/// Specialty and free-text narrowing of the loaded doctor list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorFilter {
    pub specialty_id: Option<i64>,
    pub search: Option<String>,
}

impl DoctorFilter {
    pub fn new(specialty_id: Option<i64>, search: Option<&str>) -> Self {
        Self {
            specialty_id,
            search: search.map(|s| s.to_string()),
        }
    }

    /// Blank means no search; otherwise the term is matched as typed.
    fn term(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|term| !term.trim().is_empty())
            .map(str::to_lowercase)
    }

    pub fn is_empty(&self) -> bool {
        self.specialty_id.is_none() && self.term().is_none()
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        if let Some(id) = self.specialty_id {
            if doctor.specialty_id != Some(id) {
                return false;
            }
        }
        match self.term() {
            Some(term) => {
                doctor.name.to_lowercase().contains(&term)
                    || doctor.specialty_name.to_lowercase().contains(&term)
            }
            None => true,
        }
    }

    /// Keeps list order.
    pub fn apply<'a>(&self, doctors: &'a [Doctor]) -> Vec<&'a Doctor> {
        doctors.iter().filter(|doctor| self.matches(doctor)).collect()
    }
}
