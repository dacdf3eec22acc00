//! Class-instance checkers.

use crate::checker::Checker;
use crate::ty;
use runtype_core::{Class, Value};

/// Accepts objects constructed by `class` or by any of its subclasses.
/// Abstract classes work the same way: their instances are the instances of
/// their concrete descendants.
pub fn get_instance_checker(class: &Class) -> Checker<ty::Instance> {
    let class = class.clone();
    Checker::from_fn(move |value| match value {
        Value::Object(object) => object.is_instance_of(&class),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtype_core::Object;

    #[test]
    fn test_instance_of_hierarchy() {
        let animal = Class::new_abstract("Animal");
        let dog = animal.extend("Dog");
        let cat = animal.extend("Cat");
        let rex = Value::from(dog.construct([("name", "Rex")]).unwrap());

        assert!(get_instance_checker(&animal).check(&rex));
        assert!(get_instance_checker(&dog).check(&rex));
        assert!(!get_instance_checker(&cat).check(&rex));
    }

    #[test]
    fn test_non_instances() {
        let point = Class::new("Point");
        let checker = get_instance_checker(&point);
        let lookalike = Value::from(Object::new([("x", 0), ("y", 0)]));
        assert!(!checker.check(&lookalike));
        assert!(!checker.check(&Value::from(point.clone())));
        assert!(!checker.check(&Value::Null));

        // Same name, different class.
        let other = Class::new("Point");
        let stranger = Value::from(other.construct([("x", 0)]).unwrap());
        assert!(!checker.check(&stranger));
    }
}
