//! Shared fixture classes mirroring the shapes cohesion literature tests
//! against: full sharing, full disjointness, clustered usage, and the
//! degenerate classes (no methods, no attributes, one method, idle
//! overloads).

#![allow(dead_code)]

use cohesionmap::{MemberKind, Method, Skeleton, Visibility};

pub fn method(signature: &str) -> Method {
    Method::new(signature, MemberKind::Instance, Visibility::Public)
}

/// Three methods all using both attributes.
pub fn fully_shared() -> Skeleton {
    Skeleton::builder("FullyShared")
        .attribute("alpha", MemberKind::Instance)
        .attribute("beta", MemberKind::Instance)
        .method(method("one()").with_uses(["alpha", "beta"]))
        .method(method("two()").with_uses(["alpha", "beta"]))
        .method(method("three()").with_uses(["alpha", "beta"]))
        .build()
        .unwrap()
}

/// Three methods each using their own attribute.
pub fn disjoint() -> Skeleton {
    Skeleton::builder("Disjoint")
        .attribute("a", MemberKind::Instance)
        .attribute("b", MemberKind::Instance)
        .attribute("c", MemberKind::Instance)
        .method(method("ma()").with_uses(["a"]))
        .method(method("mb()").with_uses(["b"]))
        .method(method("mc()").with_uses(["c"]))
        .build()
        .unwrap()
}

/// Two attribute clusters of two methods each, bridged by one call.
pub fn two_clusters() -> Skeleton {
    Skeleton::builder("TwoClusters")
        .attribute("a", MemberKind::Instance)
        .attribute("b", MemberKind::Instance)
        .method(method("a1()").with_uses(["a"]))
        .method(method("a2()").with_uses(["a"]).with_calls(["b1()"]))
        .method(method("b1()").with_uses(["b"]))
        .method(method("b2()").with_uses(["b"]))
        .build()
        .unwrap()
}

/// One attribute, no methods.
pub fn no_methods() -> Skeleton {
    Skeleton::builder("NoMethods")
        .attribute("lonely", MemberKind::Instance)
        .build()
        .unwrap()
}

/// Two methods (one calling the other), no attributes.
pub fn no_attributes() -> Skeleton {
    Skeleton::builder("NoAttributes")
        .method(method("first()"))
        .method(method("second()").with_calls(["first()"]))
        .build()
        .unwrap()
}

/// A single method using the single attribute.
pub fn one_method() -> Skeleton {
    Skeleton::builder("OneMethod")
        .attribute("x", MemberKind::Instance)
        .method(method("only()").with_uses(["x"]))
        .build()
        .unwrap()
}

/// Overloaded methods that never touch the declared attribute.
pub fn idle_overloads() -> Skeleton {
    Skeleton::builder("IdleOverloads")
        .attribute("unused", MemberKind::Instance)
        .method(method("run()"))
        .method(method("run(int)"))
        .build()
        .unwrap()
}

/// Every fixture class, for whole-corpus assertions.
pub fn all_classes() -> Vec<Skeleton> {
    vec![
        fully_shared(),
        disjoint(),
        two_clusters(),
        no_methods(),
        no_attributes(),
        one_method(),
        idle_overloads(),
    ]
}
