use zync::services::update_feed::UpdateFeed;
use zync::types::update::{UpdateEvent, UpdateInfo};

fn available() -> UpdateEvent {
    UpdateEvent::Available(UpdateInfo::default())
}

#[test]
fn subscriber_receives_events_in_emission_order() {
    let mut feed = UpdateFeed::new();
    let (_sub, rx) = feed.subscribe();
    feed.emit(UpdateEvent::Progress(10.0));
    feed.emit(UpdateEvent::Progress(55.0));
    feed.emit(UpdateEvent::Downloaded);

    assert_eq!(rx.recv().unwrap(), UpdateEvent::Progress(10.0));
    assert_eq!(rx.recv().unwrap(), UpdateEvent::Progress(55.0));
    assert_eq!(rx.recv().unwrap(), UpdateEvent::Downloaded);
    assert!(rx.try_recv().is_err());
}

#[test]
fn every_subscriber_sees_every_event() {
    let mut feed = UpdateFeed::new();
    let (_s1, rx1) = feed.subscribe();
    let (_s2, rx2) = feed.subscribe();
    feed.emit(available());
    assert!(rx1.try_recv().is_ok());
    assert!(rx2.try_recv().is_ok());
}

#[test]
fn no_replay_of_events_before_subscription() {
    let mut feed = UpdateFeed::new();
    feed.emit(available());
    let (_sub, rx) = feed.subscribe();
    assert!(rx.try_recv().is_err());
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut feed = UpdateFeed::new();
    let (sub, rx) = feed.subscribe();
    feed.unsubscribe(sub);
    feed.emit(available());
    assert!(rx.try_recv().is_err());
    assert_eq!(feed.subscriber_count(), 0);
}

#[test]
fn unsubscribe_twice_is_harmless() {
    let mut feed = UpdateFeed::new();
    let (sub, _rx) = feed.subscribe();
    feed.unsubscribe(sub);
    feed.unsubscribe(sub);
    assert_eq!(feed.subscriber_count(), 0);
}

#[test]
fn dropped_receiver_is_pruned_on_next_emit() {
    let mut feed = UpdateFeed::new();
    let (_sub, rx) = feed.subscribe();
    drop(rx);
    assert_eq!(feed.subscriber_count(), 1);
    feed.emit(available());
    assert_eq!(feed.subscriber_count(), 0);
}

#[test]
fn pruning_one_subscriber_leaves_the_others() {
    let mut feed = UpdateFeed::new();
    let (_s1, rx1) = feed.subscribe();
    let (_s2, rx2) = feed.subscribe();
    drop(rx1);
    feed.emit(available());
    assert_eq!(feed.subscriber_count(), 1);
    assert!(rx2.try_recv().is_ok());
}
