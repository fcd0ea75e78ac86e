//! Container and Resolver Tests

use std::error::Error as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ioc_domain::{
    BoxError, Component, Container, Error, Instance, Resolve, ResolveExt, signature, type_key,
};
use ioc_infrastructure::config::{ConfigBuilder, ResolverConfig};
use ioc_infrastructure::di::{ContainerExt, IocContainer};

trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

#[derive(Default)]
struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        42
    }
}

#[derive(Default)]
struct Unrelated;

struct Scheduler {
    clock: Arc<dyn Clock>,
}

struct Left {
    _right: Arc<Right>,
}

struct Right {
    _left: Arc<Left>,
}

struct Top {
    _mid: Arc<Mid>,
}

struct Mid {
    _bottom: Arc<Bottom>,
}

#[derive(Default)]
struct Bottom;

struct Broken;

struct Timeout {
    secs: u32,
}

struct Buffer;

fn clock_component() -> Component<FixedClock> {
    Component::<FixedClock>::new()
        .default_constructor()
        .implements::<dyn Clock>(|c| c as Arc<dyn Clock>)
}

fn scheduler_component() -> Component<Scheduler> {
    Component::<Scheduler>::new().constructor(signature![dyn Clock], |args| {
        Ok(Scheduler {
            clock: args.interface::<dyn Clock>(0)?,
        })
    })
}

fn chain_container(config: ResolverConfig) -> IocContainer {
    let container = IocContainer::with_config(config);
    container.component(Component::<Top>::new().constructor(signature![Mid], |args| {
        Ok(Top {
            _mid: args.get::<Mid>(0)?,
        })
    }));
    container.component(Component::<Mid>::new().constructor(signature![Bottom], |args| {
        Ok(Mid {
            _bottom: args.get::<Bottom>(0)?,
        })
    }));
    container.register_default::<Bottom>();
    container
}

fn cyclic_container(config: ResolverConfig) -> IocContainer {
    let container = IocContainer::with_config(config);
    container.component(Component::<Left>::new().constructor(signature![Right], |args| {
        Ok(Left {
            _right: args.get::<Right>(0)?,
        })
    }));
    container.component(Component::<Right>::new().constructor(signature![Left], |args| {
        Ok(Right {
            _left: args.get::<Left>(0)?,
        })
    }));
    container
}

#[test]
fn test_interface_binding_attaches_view() {
    let container = IocContainer::new();
    container.component(clock_component());
    container.component(scheduler_component());
    assert!(container.bind_type::<dyn Clock, FixedClock>());
    assert!(container.bounded(&type_key!(dyn Clock)));

    let instance = container.resolve(&type_key!(dyn Clock)).unwrap();
    assert!(instance.is::<FixedClock>());
    assert!(instance.has_view(&type_key!(dyn Clock)));

    let scheduler = container.make::<Scheduler>().unwrap();
    assert_eq!(scheduler.clock.now(), 42);
}

#[test]
fn test_unbound_interface_fails() {
    let container = IocContainer::new();
    container.component(scheduler_component());

    assert!(matches!(
        container.resolve(&type_key!(dyn Clock)),
        Err(Error::UnboundAbstractType { .. })
    ));
    match container.make::<Scheduler>() {
        Err(Error::UnboundAbstractType { type_name }) => assert_eq!(type_name, "dyn Clock"),
        Err(other) => panic!("Expected UnboundAbstractType, got {other}"),
        Ok(_) => panic!("Expected UnboundAbstractType"),
    }
}

#[test]
fn test_unregistered_component_fails() {
    let container = IocContainer::new();
    assert!(matches!(
        container.make::<Bottom>(),
        Err(Error::UnregisteredComponent { .. })
    ));
}

#[test]
fn test_binding_to_type_without_interface_fails() {
    let container = IocContainer::new();
    container.register_default::<Unrelated>();
    container.bind_type::<dyn Clock, Unrelated>();

    assert!(matches!(
        container.resolve(&type_key!(dyn Clock)),
        Err(Error::NotAnImplementation { .. })
    ));
}

#[test]
fn test_primitive_parameter_needs_contextual_value() {
    let container = IocContainer::new();
    container.component(
        Component::<Timeout>::new().constructor(signature![u32], |args| {
            Ok(Timeout {
                secs: args.value::<u32>(0)?,
            })
        }),
    );

    match container.make::<Timeout>() {
        Err(Error::UnsupportedParameterKind { owner, kind, .. }) => {
            assert_eq!(owner, "Timeout");
            assert_eq!(kind, "primitive");
        }
        Err(other) => panic!("Expected UnsupportedParameterKind, got {other}"),
        Ok(_) => panic!("Expected UnsupportedParameterKind"),
    }

    container
        .when(type_key!(Timeout))
        .needs(type_key!(u32))
        .give_value(30u32)
        .unwrap();
    assert_eq!(container.make::<Timeout>().unwrap().secs, 30);
}

#[test]
fn test_array_parameter_is_unsupported() {
    let container = IocContainer::new();
    container.component(
        Component::<Buffer>::new().constructor(signature![[u8; 4]], |_| Ok(Buffer)),
    );
    match container.make::<Buffer>() {
        Err(Error::UnsupportedParameterKind { kind, .. }) => assert_eq!(kind, "array"),
        Err(other) => panic!("Expected UnsupportedParameterKind, got {other}"),
        Ok(_) => panic!("Expected UnsupportedParameterKind"),
    }
}

#[test]
fn test_missing_constructor_signature_fails() {
    let container = IocContainer::new();
    container.register_default::<Bottom>();

    match container.resolve_with(&type_key!(Bottom), &signature![u8]) {
        Err(Error::NoMatchingConstructor { signature, .. }) => assert_eq!(signature, "(u8)"),
        other => panic!("Expected NoMatchingConstructor, got {other:?}"),
    }
    assert!(
        container
            .resolve_with(&type_key!(Bottom), &signature![])
            .unwrap()
            .is::<Bottom>()
    );
}

#[test]
fn test_constructor_failure_keeps_source() {
    let container = IocContainer::new();
    container.component(Component::<Broken>::new().constructor(
        signature![],
        |_| -> Result<Broken, BoxError> { Err("socket refused".into()) },
    ));

    let err = container.resolve(&type_key!(Broken)).unwrap_err();
    match &err {
        Error::InvocationFailure { target, .. } => assert_eq!(target, "Broken::new()"),
        other => panic!("Expected InvocationFailure, got {other}"),
    }
    assert_eq!(err.source().unwrap().to_string(), "socket refused");
}

#[test]
fn test_factory_failure_is_returned_unchanged() {
    let container = IocContainer::new();
    container.bind_fn(type_key!(dyn Clock), |_| {
        Err(Error::precondition("clock not calibrated"))
    });
    assert!(matches!(
        container.resolve(&type_key!(dyn Clock)),
        Err(Error::PreconditionViolation { .. })
    ));
}

#[test]
fn test_factory_resolves_through_live_session() {
    let container = IocContainer::new();
    container.component(clock_component());
    container.bind_type::<dyn Clock, FixedClock>();
    container.bind_fn(type_key!(Scheduler), |resolver| {
        let clock = resolver.make_interface::<dyn Clock>()?;
        Ok(Instance::new(Scheduler { clock }))
    });

    let scheduler = container.make::<Scheduler>().unwrap();
    assert_eq!(scheduler.clock.now(), 42);
}

#[test]
fn test_transient_factory_runs_per_resolve() {
    let calls = Arc::new(AtomicUsize::new(0));
    let container = IocContainer::new();
    let counter = Arc::clone(&calls);
    container.bind_fn(type_key!(dyn Clock), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Instance::implementing::<_, dyn Clock>(FixedClock, |c| {
            c as Arc<dyn Clock>
        }))
    });

    let first = container.resolve(&type_key!(dyn Clock)).unwrap();
    let second = container.resolve(&type_key!(dyn Clock)).unwrap();
    assert!(!first.ptr_eq(&second));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_singleton_factory_runs_once_across_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let container = Arc::new(IocContainer::new());
    let counter = Arc::clone(&calls);
    container.singleton_fn(type_key!(dyn Clock), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(std::time::Duration::from_millis(10));
        Ok(Instance::implementing::<_, dyn Clock>(FixedClock, |c| {
            c as Arc<dyn Clock>
        }))
    });

    let instances: Vec<Instance> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let container = Arc::clone(&container);
                scope.spawn(move || container.resolve(&type_key!(dyn Clock)).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(instances.windows(2).all(|pair| pair[0].ptr_eq(&pair[1])));
    assert_eq!(container.stats().cached_singletons, 1);
}

#[test]
fn test_singleton_type_is_shared_until_rebound() {
    let container = IocContainer::new();
    container.component(clock_component());
    container.singleton_type::<dyn Clock, FixedClock>();

    let first = container.make_interface::<dyn Clock>().unwrap();
    let second = container.make_interface::<dyn Clock>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    container.singleton_type::<dyn Clock, FixedClock>();
    let third = container.make_interface::<dyn Clock>().unwrap();
    assert!(!Arc::ptr_eq(&first, &third));
}

#[test]
fn test_concurrent_rebind_never_keeps_replaced_singleton() {
    for _ in 0..2_000 {
        let container = IocContainer::new();
        container.singleton_fn(type_key!(Timeout), |_| Ok(Instance::new(Timeout { secs: 1 })));

        std::thread::scope(|scope| {
            let reader = scope.spawn(|| container.make::<Timeout>().map(|timeout| timeout.secs));
            container.singleton_fn(type_key!(Timeout), |_| Ok(Instance::new(Timeout { secs: 2 })));
            let seen = reader.join().unwrap().unwrap();
            assert!(seen == 1 || seen == 2, "unexpected timeout {seen}");
        });

        assert_eq!(container.make::<Timeout>().unwrap().secs, 2);
        assert_eq!(container.stats().cached_singletons, 1);
    }
}

#[test]
fn test_type_binding_wins_over_factory_binding() {
    let calls = Arc::new(AtomicUsize::new(0));
    let container = IocContainer::new();
    container.component(clock_component());
    container.bind_type::<dyn Clock, FixedClock>();
    let counter = Arc::clone(&calls);
    container.bind_fn(type_key!(dyn Clock), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(Instance::new(Unrelated))
    });

    let stats = container.stats();
    assert_eq!((stats.type_bindings, stats.factory_bindings), (1, 1));

    let instance = container.resolve(&type_key!(dyn Clock)).unwrap();
    assert!(instance.downcast_ref::<FixedClock>().is_some());
    assert_eq!(container.make_interface::<dyn Clock>().unwrap().now(), 42);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_failed_singleton_is_retried() {
    let calls = Arc::new(AtomicUsize::new(0));
    let container = IocContainer::new();
    let counter = Arc::clone(&calls);
    container.singleton_fn(type_key!(Bottom), move |_| {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(Error::precondition("warming up"))
        } else {
            Ok(Instance::new(Bottom))
        }
    });

    assert!(container.resolve(&type_key!(Bottom)).is_err());
    assert!(container.resolve(&type_key!(Bottom)).is_ok());
    assert!(container.resolve(&type_key!(Bottom)).is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_cycle_is_reported_with_path() {
    let container = cyclic_container(ResolverConfig::default());

    match container.make::<Left>() {
        Err(Error::CyclicDependency { path }) => assert_eq!(path, "Left -> Right -> Left"),
        Err(other) => panic!("Expected CyclicDependency, got {other}"),
        Ok(_) => panic!("Expected CyclicDependency"),
    }
}

#[test]
fn test_cycle_without_detection_hits_depth_limit() {
    let config = ConfigBuilder::new()
        .with_cycle_detection(false)
        .with_max_depth(6)
        .build();
    let container = cyclic_container(config.resolver);

    match container.make::<Left>() {
        Err(Error::DepthExceeded { limit, .. }) => assert_eq!(limit, 6),
        Err(other) => panic!("Expected DepthExceeded, got {other}"),
        Ok(_) => panic!("Expected DepthExceeded"),
    }
}

#[test]
fn test_singleton_cycle_without_detection_does_not_block() {
    let config = ConfigBuilder::new().with_cycle_detection(false).build();
    let container = IocContainer::with_config(config.resolver);
    container.singleton_fn(type_key!(Bottom), |resolver| resolver.resolve(&type_key!(Bottom)));

    assert!(matches!(
        container.resolve(&type_key!(Bottom)),
        Err(Error::CyclicDependency { .. })
    ));
}

#[test]
fn test_depth_limit() {
    let shallow = chain_container(ResolverConfig {
        max_depth: 2,
        ..ResolverConfig::default()
    });
    match shallow.make::<Top>() {
        Err(Error::DepthExceeded { limit, path }) => {
            assert_eq!(limit, 2);
            assert_eq!(path, "Top -> Mid -> Bottom");
        }
        Err(other) => panic!("Expected DepthExceeded, got {other}"),
        Ok(_) => panic!("Expected DepthExceeded"),
    }

    let deep = chain_container(ResolverConfig {
        max_depth: 3,
        ..ResolverConfig::default()
    });
    assert!(deep.make::<Top>().is_ok());
}

#[test]
fn test_call_injects_method_arguments() {
    let container = IocContainer::new();
    container.component(
        Component::<FixedClock>::new()
            .default_constructor()
            .method("offset", signature![u64], |clock, args| {
                Ok(clock.now() + args.value::<u64>(0)?)
            }),
    );
    container
        .when(type_key!(FixedClock))
        .needs(type_key!(u64))
        .give_value(8u64)
        .unwrap();

    let clock = container.resolve(&type_key!(FixedClock)).unwrap();
    let offset: u64 = container
        .call_value(&clock, "offset", &signature![u64])
        .unwrap();
    assert_eq!(offset, 50);

    assert!(matches!(
        container.call(&clock, "offset", &signature![u32]),
        Err(Error::NoMatchingMethod { .. })
    ));
    assert!(matches!(
        container.call(&Instance::new(Unrelated), "offset", &signature![u64]),
        Err(Error::NoMatchingMethod { .. })
    ));
}

#[test]
fn test_containers_are_independent() {
    let first = IocContainer::new();
    let second = IocContainer::new();
    first.component(clock_component());
    first.bind_type::<dyn Clock, FixedClock>();

    assert!(first.make_interface::<dyn Clock>().is_ok());
    assert!(!second.bounded(&type_key!(dyn Clock)));
    assert!(second.make_interface::<dyn Clock>().is_err());
}
