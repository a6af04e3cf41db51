//! Runtime tests: real effect handling and task spawning with counting fakes.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use geoweather::api::WeatherSource;
use geoweather::effects::Services;
use geoweather::locate::Locator;
use geoweather::runtime::Runtime;
use geoweather_core::{
    Action, AppState, Coordinate, FetchError, FetchState, LocateError, WeatherSnapshot,
};

#[derive(Default)]
struct CountingLocator {
    calls: AtomicUsize,
    fail: bool,
}

#[async_trait]
impl Locator for CountingLocator {
    async fn current_position(&self) -> Result<Coordinate, LocateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(LocateError::PermissionDenied("User denied Geolocation".into()))
        } else {
            Ok(Coordinate::new(35.68, 139.69))
        }
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

#[derive(Default)]
struct CountingWeather {
    calls: AtomicUsize,
}

#[async_trait]
impl WeatherSource for CountingWeather {
    async fn current_weather(&self, _coordinate: Coordinate) -> Result<WeatherSnapshot, FetchError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(WeatherSnapshot {
            temperature: 20.0 + n as f64,
            apparent_temperature: 19.0,
            humidity: 50,
            precipitation: 0.0,
            weather_code: 2,
            wind_speed: 4.0,
            wind_direction: 90.0,
            surface_pressure: 1012.0,
            timezone: "Asia/Tokyo".into(),
        })
    }
}

fn runtime(locator: Arc<CountingLocator>, weather: Arc<CountingWeather>) -> Runtime {
    let services = Services::new(locator, weather, Duration::from_secs(1));
    Runtime::new(AppState::new(), services)
}

async fn settle(runtime: &mut Runtime) {
    while runtime.state().fetch.is_pending() {
        let action = tokio::time::timeout(Duration::from_secs(5), runtime.next_action())
            .await
            .expect("action in time")
            .expect("channel open");
        runtime.dispatch(action);
    }
}

#[tokio::test]
async fn test_refresh_relocates_every_cycle() {
    let locator = Arc::new(CountingLocator::default());
    let weather = Arc::new(CountingWeather::default());
    let mut runtime = runtime(locator.clone(), weather.clone());

    runtime.dispatch(Action::Mount);
    settle(&mut runtime).await;
    assert_eq!(runtime.state().fetch.snapshot().map(|s| s.temperature), Some(20.0));

    runtime.dispatch(Action::WeatherFetch);
    assert!(runtime.state().fetch.is_pending());
    settle(&mut runtime).await;

    assert_eq!(locator.calls.load(Ordering::SeqCst), 2);
    assert_eq!(weather.calls.load(Ordering::SeqCst), 2);
    assert_eq!(runtime.state().fetch.snapshot().map(|s| s.temperature), Some(21.0));
}

#[tokio::test]
async fn test_locate_failure_never_fetches() {
    let locator = Arc::new(CountingLocator {
        fail: true,
        ..Default::default()
    });
    let weather = Arc::new(CountingWeather::default());
    let mut runtime = runtime(locator.clone(), weather.clone());

    runtime.dispatch(Action::Mount);
    settle(&mut runtime).await;

    assert_eq!(weather.calls.load(Ordering::SeqCst), 0);
    match &runtime.state().fetch {
        FetchState::Failed(message) => {
            assert!(message.starts_with("Unable to retrieve your location: "));
            assert!(message.contains("User denied Geolocation"));
        }
        other => panic!("unexpected state: {other:?}"),
    }
}

#[tokio::test]
async fn test_mount_twice_starts_one_cycle() {
    let locator = Arc::new(CountingLocator::default());
    let weather = Arc::new(CountingWeather::default());
    let mut runtime = runtime(locator.clone(), weather.clone());

    runtime.dispatch(Action::Mount);
    runtime.dispatch(Action::Mount);
    settle(&mut runtime).await;

    assert_eq!(locator.calls.load(Ordering::SeqCst), 1);
}

struct SlowLocator {
    finished: AtomicUsize,
}

#[async_trait]
impl Locator for SlowLocator {
    async fn current_position(&self) -> Result<Coordinate, LocateError> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.finished.fetch_add(1, Ordering::SeqCst);
        Ok(Coordinate::new(35.68, 139.69))
    }

    fn name(&self) -> &'static str {
        "slow"
    }
}

#[tokio::test]
async fn test_dropping_runtime_cancels_in_flight_locate() {
    let locator = Arc::new(SlowLocator {
        finished: AtomicUsize::new(0),
    });
    let weather = Arc::new(CountingWeather::default());
    let services = Services::new(locator.clone(), weather.clone(), Duration::from_secs(1));
    let mut runtime = Runtime::new(AppState::new(), services);

    runtime.dispatch(Action::Mount);
    drop(runtime);
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(locator.finished.load(Ordering::SeqCst), 0);
    assert_eq!(weather.calls.load(Ordering::SeqCst), 0);
}
