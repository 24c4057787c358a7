//! Interactive replies: suspension of a flow and its hand-back to the caller.

mod common;

use common::{Loop, Named, RequireOtherRequestAction};
use payflow::{
    Action, ActionResult, Executor, Gateway, Interrupt, Outcome, Reply, Request,
    testing::{CountingAction, RecordedEvent, RecordedResult, RecordingExtension, ReplyAction},
};
use std::sync::atomic::Ordering;

#[derive(Debug)]
struct Checkout;

impl Request for Checkout {}

#[derive(Debug)]
struct Confirm;

impl Request for Confirm {
    fn request_name(&self) -> &'static str {
        "confirm"
    }
}

/// Suspends a `Loop` once it has run down to zero, after every earlier level
/// has re-dispatched it.
struct SuspendingLoopAction;

impl Action for SuspendingLoopAction {
    fn supports(&self, request: &dyn Request) -> bool {
        request.is::<Loop>()
    }

    fn execute(&self, request: &mut dyn Request, gateway: &mut dyn Executor) -> ActionResult {
        let Some(looped) = request.downcast_mut::<Loop>() else {
            return Err(Interrupt::failure("expected a loop request"));
        };
        if looped.remaining == 0 {
            return Err(Reply::redirect("https://acs.example/3ds").into());
        }
        looped.remaining -= 1;
        gateway.execute(request)
    }
}

#[test]
fn test_reply_returned_at_top_level() {
    let gateway = Gateway::builder()
        .action(ReplyAction::<Checkout>::new(Reply::redirect(
            "https://psp.example/pay",
        )))
        .build();

    let outcome = gateway.execute(&mut Checkout).unwrap();

    assert!(outcome.is_suspended());
    assert_eq!(
        outcome,
        Outcome::Suspended(Reply::redirect("https://psp.example/pay"))
    );
}

#[test]
fn test_reply_from_nested_level_reaches_caller() {
    let outer = RequireOtherRequestAction::new("capture", "authorize");
    let finished = outer.finished();
    let gateway = Gateway::builder()
        .action(outer)
        .action(ReplyAction::<Named>::new(Reply::redirect(
            "https://acs.example/challenge",
        )))
        .build();

    let outcome = gateway.execute(&mut Named::new("capture")).unwrap();

    assert_eq!(
        outcome.into_reply(),
        Some(Reply::redirect("https://acs.example/challenge"))
    );
    // The outer action never got past its nested dispatch.
    assert_eq!(finished.load(Ordering::SeqCst), 0);
}

#[test]
fn test_reply_passes_through_several_levels_unchanged() {
    let reply = Reply::post_redirect(
        "https://acs.example/pareq",
        [
            ("PaReq", "eJxVUt1ugjAU"),
            ("MD", "order-42"),
            ("TermUrl", "https://shop.example/done"),
        ],
    );
    let gateway = Gateway::builder()
        .action(RequireOtherRequestAction::new("capture", "authorize"))
        .action(RequireOtherRequestAction::new("authorize", "sync"))
        .action(RequireOtherRequestAction::new("sync", "challenge"))
        .action(ReplyAction::<Named>::new(reply.clone()))
        .build();

    let outcome = gateway.execute(&mut Named::new("capture")).unwrap();

    let returned = outcome.into_reply().expect("flow is suspended");
    assert_eq!(returned, reply);
    assert_eq!(returned.status(), 200);
    assert_eq!(returned.url(), Some("https://acs.example/pareq"));
}

#[test]
fn test_reply_from_deep_self_redispatch() {
    let gateway = Gateway::builder().action(SuspendingLoopAction).build();

    let mut looped = Loop { remaining: 40 };
    let outcome = gateway.execute(&mut looped).unwrap();

    assert_eq!(
        outcome.reply().and_then(Reply::url),
        Some("https://acs.example/3ds")
    );
    assert_eq!(looped.remaining, 0);
}

#[test]
fn test_state_is_fresh_after_suspension() {
    let gateway = Gateway::builder().action(SuspendingLoopAction).build();

    // 61 dispatches of one request per call: two calls sharing counters
    // would cross the threshold of 100.
    for _ in 0..3 {
        let outcome = gateway.execute(&mut Loop { remaining: 60 }).unwrap();
        assert!(outcome.is_suspended());
    }
}

#[test]
fn test_action_may_handle_nested_reply_itself() {
    struct FallbackAction;

    impl Action for FallbackAction {
        fn supports(&self, request: &dyn Request) -> bool {
            request.is::<Checkout>()
        }

        fn execute(&self, _request: &mut dyn Request, gateway: &mut dyn Executor) -> ActionResult {
            match gateway.execute(&mut Confirm) {
                Err(Interrupt::Reply(_)) => Ok(()),
                other => other,
            }
        }
    }

    let gateway = Gateway::builder()
        .action(FallbackAction)
        .action(ReplyAction::<Confirm>::new(Reply::response("confirm?")))
        .build();

    let outcome = gateway.execute(&mut Checkout).unwrap();

    assert!(outcome.is_completed());
}

#[test]
fn test_extension_reply_short_circuits_dispatch() {
    let confirm = CountingAction::<Confirm>::new();
    let recorder = RecordingExtension::new().replying_to::<Confirm>(Reply::response("hold"));
    let gateway = Gateway::builder()
        .action(confirm.clone())
        .extension(recorder.clone())
        .build();

    let outcome = gateway.execute(&mut Confirm).unwrap();

    assert_eq!(outcome.into_reply(), Some(Reply::response("hold")));
    assert_eq!(confirm.count(), 0);
    assert_eq!(
        recorder.events(),
        vec![
            RecordedEvent::PreExecute {
                request: "confirm",
                depth: 1,
            },
            RecordedEvent::PostExecute {
                request: "confirm",
                depth: 1,
                result: RecordedResult::Replied,
            },
        ]
    );
}

#[test]
fn test_post_execute_sees_reply_at_every_level() {
    let recorder = RecordingExtension::new();
    let gateway = Gateway::builder()
        .action(RequireOtherRequestAction::new("capture", "authorize"))
        .action(ReplyAction::<Named>::new(Reply::redirect("https://acs.example")))
        .extension(recorder.clone())
        .build();

    assert!(gateway.execute(&mut Named::new("capture")).unwrap().is_suspended());

    let post: Vec<_> = recorder
        .events()
        .into_iter()
        .filter_map(|event| match event {
            RecordedEvent::PostExecute {
                request,
                depth,
                result,
            } => Some((request, depth, result)),
            _ => None,
        })
        .collect();
    assert_eq!(
        post,
        vec![
            ("authorize", 2, RecordedResult::Replied),
            ("capture", 1, RecordedResult::Replied),
        ]
    );
}
