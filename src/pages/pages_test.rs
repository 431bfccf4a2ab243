use futures::FutureExt;

use super::*;

#[test]
fn every_factory_resolves_on_first_poll() {
    for page in [home::PAGE, about::PAGE, error_demo::PAGE, error::PAGE] {
        let outcome = page.load().now_or_never();
        let module = outcome.unwrap().unwrap();
        assert_eq!(module.name, page.name);
    }
}

#[test]
fn page_names_are_distinct() {
    let names = [home::PAGE.name, about::PAGE.name, error_demo::PAGE.name, error::PAGE.name];
    for (i, name) in names.iter().enumerate() {
        assert!(!names[i + 1..].contains(name), "{name} declared twice");
    }
}
