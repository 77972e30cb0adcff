use crate::domain::common::AggregateId;
use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор коммерческого агента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommercialId(pub Uuid);

impl CommercialId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for CommercialId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CommercialId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Коммерческий агент (менеджер, за которым закрепляется заказ)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commercial {
    pub id: CommercialId,
    pub name: String,
}

impl Commercial {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CommercialId::new_v4(),
            name: name.into(),
        }
    }
}

/// Коллатор корневой локали (CLDR root): буквы с диакритикой стоят рядом с базовыми,
/// регистр различается только на третьем уровне.
fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&Default::default(), options).ok()
}

fn compare_with(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    let ordering = match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    // при равенстве решает точное сравнение, чтобы порядок был детерминированным
    ordering.then_with(|| a.cmp(b))
}

/// Сравнение имён с учётом локали и регистра
pub fn compare_names(a: &str, b: &str) -> Ordering {
    compare_with(root_collator().as_ref(), a, b)
}

/// Копия списка, отсортированная по имени
pub fn sort_by_name(commercials: &[Commercial]) -> Vec<Commercial> {
    let collator = root_collator();
    let mut sorted = commercials.to_vec();
    sorted.sort_by(|a, b| compare_with(collator.as_ref(), &a.name, &b.name));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[Commercial]) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_name() {
        let list = vec![Commercial::new("Bob"), Commercial::new("Ana")];
        assert_eq!(names(&sort_by_name(&list)), vec!["Ana", "Bob"]);
    }

    #[test]
    fn test_sort_ignores_case() {
        let list = vec![
            Commercial::new("carla"),
            Commercial::new("Bruno"),
            Commercial::new("alberto"),
        ];
        assert_eq!(
            names(&sort_by_name(&list)),
            vec!["alberto", "Bruno", "carla"]
        );
    }

    #[test]
    fn test_sort_keeps_input_untouched() {
        let list = vec![Commercial::new("Bob"), Commercial::new("Ana")];
        let _ = sort_by_name(&list);
        assert_eq!(names(&list), vec!["Bob", "Ana"]);
    }

    #[test]
    fn test_sort_accented_names_with_base_letter() {
        let list = vec![
            Commercial::new("Zé"),
            Commercial::new("Bruno"),
            Commercial::new("Álvaro"),
        ];
        assert_eq!(names(&sort_by_name(&list)), vec!["Álvaro", "Bruno", "Zé"]);

        let list = vec![
            Commercial::new("Émile"),
            Commercial::new("Eva"),
            Commercial::new("Dario"),
            Commercial::new("Fabio"),
        ];
        assert_eq!(
            names(&sort_by_name(&list)),
            vec!["Dario", "Émile", "Eva", "Fabio"]
        );
    }

    #[test]
    fn test_compare_names() {
        assert_eq!(compare_names("Ana", "Ana"), Ordering::Equal);
        assert_eq!(compare_names("Álvaro", "Zé"), Ordering::Less);
        assert_ne!(compare_names("ana", "Ana"), Ordering::Equal);
    }

    #[test]
    fn test_fallback_without_collator() {
        assert_eq!(compare_with(None, "bob", "Ana"), Ordering::Greater);
        assert_eq!(compare_with(None, "ana", "Ana"), Ordering::Greater);
    }
}
