//! `#[derive(Request)]`.

#![cfg(feature = "macros")]

use payflow::{Gateway, Request, testing::CountingAction};

#[derive(Debug, Request)]
struct Checkout {
    amount: u64,
}

#[derive(Debug, Request)]
#[request(name = "update_order")]
struct UpdateOrder {
    location: String,
}

#[derive(Debug, Request)]
#[request(name = "wrapped")]
struct Wrapped<T: std::fmt::Debug + Send + 'static> {
    inner: T,
}

#[test]
fn test_derive_defaults_to_type_name() {
    let checkout = Checkout { amount: 10 };
    assert_eq!(checkout.request_name(), std::any::type_name::<Checkout>());
    assert_eq!(checkout.amount, 10);
}

#[test]
fn test_derive_with_custom_name() {
    let update = UpdateOrder {
        location: "https://shop.example/orders/1".into(),
    };
    assert_eq!(update.request_name(), "update_order");
    assert!(update.location.ends_with("/1"));

    let wrapped = Wrapped { inner: 5_u8 };
    assert_eq!(wrapped.request_name(), "wrapped");
    assert_eq!(wrapped.inner, 5);
}

#[test]
fn test_derived_request_is_dispatched() {
    let counter = CountingAction::<UpdateOrder>::new();
    let gateway = Gateway::builder().action(counter.clone()).build();

    let mut update = UpdateOrder {
        location: String::new(),
    };
    assert!(gateway.execute(&mut update).unwrap().is_completed());
    assert_eq!(counter.count(), 1);

    let err = gateway.execute(&mut Checkout { amount: 1 }).unwrap_err();
    assert!(err.is_not_supported());
}
