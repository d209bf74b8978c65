use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::attendance::AttendanceRecord;
use crate::model::department::{Department, DepartmentUpdate, NewDepartment};
use crate::model::personnel::{NewPersonnel, Personnel, PersonnelUpdate};
use crate::store::kv::KvStore;

pub const PERSONNEL_KEY: &str = "personnel_data";
pub const ATTENDANCE_KEY: &str = "attendance_data";
pub const DEPARTMENT_KEY: &str = "department_data";

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Typed collections over a [`KvStore`].
///
/// Nothing is cached: every call loads the whole collection, and every write
/// stores the whole collection back.
pub struct RecordStore<S> {
    kv: S,
}

impl<S: KvStore> RecordStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    #[cfg(test)]
    pub fn kv(&self) -> &S {
        &self.kv
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        match self.kv.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.kv.set(key, &raw)
    }

    /// Like `save`, but drops the key once the collection is empty. Only for
    /// collections whose absence reads back as empty.
    fn save_or_clear<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<()> {
        if items.is_empty() {
            self.kv.delete(key)
        } else {
            self.save(key, items)
        }
    }

    // ---------- personnel ----------

    pub fn personnel(&self) -> Result<Vec<Personnel>> {
        Ok(self.load(PERSONNEL_KEY)?.unwrap_or_default())
    }

    pub fn get_personnel(&self, id: &str) -> Result<Personnel> {
        self.personnel()?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::not_found("personnel", id))
    }

    pub fn add_personnel(&mut self, new: NewPersonnel) -> Result<Personnel> {
        let person = new.into_personnel(new_id())?;

        let mut all = self.personnel()?;
        all.push(person.clone());
        self.save(PERSONNEL_KEY, &all)?;

        info!(personnel_id = %person.id, name = %person.name, "Personnel added");
        Ok(person)
    }

    pub fn update_personnel(&mut self, id: &str, update: PersonnelUpdate) -> Result<Personnel> {
        let mut all = self.personnel()?;
        let person = all
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::not_found("personnel", id))?;

        update.apply(person)?;
        let updated = person.clone();
        self.save(PERSONNEL_KEY, &all)?;

        info!(personnel_id = id, "Personnel updated");
        Ok(updated)
    }

    /// Removes the person only; their attendance records stay.
    pub fn delete_personnel(&mut self, id: &str) -> Result<bool> {
        let mut all = self.personnel()?;
        let before = all.len();
        all.retain(|p| p.id != id);
        if all.len() == before {
            return Ok(false);
        }

        self.save_or_clear(PERSONNEL_KEY, &all)?;
        info!(personnel_id = id, "Personnel deleted");
        Ok(true)
    }

    // ---------- attendance ----------

    pub fn attendance(&self) -> Result<Vec<AttendanceRecord>> {
        Ok(self.load(ATTENDANCE_KEY)?.unwrap_or_default())
    }

    pub fn save_attendance(&mut self, records: &[AttendanceRecord]) -> Result<()> {
        self.save(ATTENDANCE_KEY, records)
    }

    pub fn delete_attendance(&mut self, id: &str) -> Result<bool> {
        let mut all = self.attendance()?;
        let before = all.len();
        all.retain(|r| r.id != id);
        if all.len() == before {
            return Ok(false);
        }

        self.save_or_clear(ATTENDANCE_KEY, &all)?;
        info!(record_id = id, "Attendance record deleted");
        Ok(true)
    }

    // ---------- departments ----------

    /// Seeds the default departments when the collection was never written.
    pub fn departments(&mut self) -> Result<Vec<Department>> {
        if let Some(departments) = self.load(DEPARTMENT_KEY)? {
            return Ok(departments);
        }

        let defaults = Department::defaults();
        self.save(DEPARTMENT_KEY, &defaults)?;
        info!(count = defaults.len(), "Seeded default departments");
        Ok(defaults)
    }

    fn ensure_unique_name(all: &[Department], name: &str, except_id: Option<&str>) -> Result<()> {
        let name = name.trim();
        let taken = all
            .iter()
            .any(|d| d.name.trim() == name && Some(d.id.as_str()) != except_id);
        if taken {
            warn!(name, "Duplicate department name rejected");
            return Err(Error::validation(format!("department {name} already exists")));
        }
        Ok(())
    }

    pub fn add_department(&mut self, new: NewDepartment) -> Result<Department> {
        new.validate()?;
        let mut all = self.departments()?;
        Self::ensure_unique_name(&all, &new.name, None)?;

        let department = Department {
            id: new_id(),
            name: new.name.trim().to_string(),
            description: new.description,
        };
        all.push(department.clone());
        self.save(DEPARTMENT_KEY, &all)?;

        info!(department = %department.name, "Department added");
        Ok(department)
    }

    pub fn update_department(&mut self, id: &str, update: DepartmentUpdate) -> Result<Department> {
        let mut all = self.departments()?;
        let index = all
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| Error::not_found("department", id))?;
        if let Some(name) = &update.name {
            Self::ensure_unique_name(&all, name, Some(id))?;
        }

        update.apply(&mut all[index])?;
        let updated = all[index].clone();
        self.save(DEPARTMENT_KEY, &all)?;

        info!(department_id = id, "Department updated");
        Ok(updated)
    }

    pub fn delete_department(&mut self, id: &str) -> Result<bool> {
        let mut all = self.departments()?;
        let before = all.len();
        all.retain(|d| d.id != id);
        if all.len() == before {
            return Ok(false);
        }

        self.save(DEPARTMENT_KEY, &all)?;
        info!(department_id = id, "Department deleted");
        Ok(true)
    }
}
