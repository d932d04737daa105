#[cfg(test)]
mod tests {
    use taskminder::libs::tags::TagRegistry;

    #[test]
    fn test_create_reuses_name() {
        let mut registry = TagRegistry::new();
        let work = registry.create("Work", None);
        let again = registry.create("work", Some("#000000".into()));
        assert_eq!(work, again);
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn test_colors_rotate() {
        let mut registry = TagRegistry::new();
        let a = registry.create("a", None);
        let b = registry.create("b", None);
        let custom = registry.create("c", Some("#123456".into()));
        assert_ne!(a.color, b.color);
        assert_eq!(custom.color, "#123456");
    }

    #[test]
    fn test_lookup_by_id_or_name() {
        let mut registry = TagRegistry::new();
        let home = registry.create("home", None);
        assert_eq!(registry.lookup(&home.id), Some(&home));
        assert_eq!(registry.lookup("HOME"), Some(&home));
        assert_eq!(registry.lookup("garden"), None);
    }

    #[test]
    fn test_resolve_skips_deleted() {
        let mut registry = TagRegistry::new();
        let ids = registry.get_or_create(&["a".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0], ids[2]);
        assert_eq!(registry.list().len(), 2);

        registry.delete(&ids[0]).unwrap();
        let names: Vec<_> = registry.resolve(&ids).iter().map(|tag| tag.name.clone()).collect();
        assert_eq!(names, vec!["b".to_string()]);
    }
}
