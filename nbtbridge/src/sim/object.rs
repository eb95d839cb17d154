use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::host::{ClassId, HostObject, HostValue};

/// An object inside the simulated server.
#[derive(Debug)]
pub(super) struct SimObject {
    pub class: ClassId,
    pub body: Body,
}

#[derive(Debug)]
pub(super) enum Body {
    /// A scalar, string or array tag. Immutable once built.
    Leaf(HostValue),
    List(Mutex<Vec<HostObject>>),
    /// Entries in insertion order. Keys are usually strings but nothing
    /// stops other values from ending up here.
    Compound(Mutex<Vec<(HostValue, HostObject)>>),
    Item(Item),
}

#[derive(Debug)]
pub(super) struct Item {
    pub material: String,
    pub count: u8,
    pub tag: Mutex<Option<HostObject>>,
}

pub(super) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl SimObject {
    pub fn new(class: ClassId, body: Body) -> HostObject {
        Arc::new(SimObject { class, body })
    }

    pub fn item(class: ClassId, material: String, count: u8, tag: Option<HostObject>) -> HostObject {
        SimObject::new(
            class,
            Body::Item(Item {
                material,
                count,
                tag: Mutex::new(tag),
            }),
        )
    }

    pub fn downcast(obj: &HostObject) -> Option<&SimObject> {
        obj.downcast_ref::<SimObject>()
    }
}

/// Copies a tag tree so that changes to the copy never reach the original.
pub(super) fn deep_copy(obj: &HostObject) -> HostObject {
    let sim = match SimObject::downcast(obj) {
        Some(sim) => sim,
        None => return Arc::clone(obj),
    };
    let body = match &sim.body {
        Body::Leaf(value) => Body::Leaf(value.clone()),
        Body::List(items) => Body::List(Mutex::new(lock(items).iter().map(deep_copy).collect())),
        Body::Compound(entries) => Body::Compound(Mutex::new(
            lock(entries)
                .iter()
                .map(|(k, v)| (k.clone(), deep_copy(v)))
                .collect(),
        )),
        Body::Item(item) => Body::Item(Item {
            material: item.material.clone(),
            count: item.count,
            tag: Mutex::new(lock(&item.tag).as_ref().map(deep_copy)),
        }),
    };
    SimObject::new(sim.class, body)
}
