use super::*;

#[test]
fn default_locale_is_indonesian() {
    assert_eq!(Locale::default(), Locale::Id);
    assert_eq!(strings(Locale::default()).nav_home, "Beranda");
}

#[test]
fn locale_codes_round_trip() {
    for locale in [Locale::Id, Locale::En] {
        assert_eq!(Locale::from_code(locale.code()), Some(locale));
    }
    assert_eq!(Locale::from_code(" EN "), Some(Locale::En));
    assert_eq!(Locale::from_code("fr"), None);
}

#[test]
fn toggled_switches_between_locales() {
    assert_eq!(Locale::Id.toggled(), Locale::En);
    assert_eq!(Locale::En.toggled().toggled(), Locale::En);
}

#[test]
fn locale_toggle_label_names_the_other_locale() {
    assert_eq!(strings(Locale::Id).locale_toggle, Locale::En.code().to_uppercase());
    assert_eq!(strings(Locale::En).locale_toggle, Locale::Id.code().to_uppercase());
}

#[test]
fn tables_differ_per_locale() {
    assert_ne!(strings(Locale::Id), strings(Locale::En));
}
