// src/app/browser_event_manager.rs
//! Handles attaching and detaching the window keyboard listeners (keydown, keyup, blur).

use std::sync::{Arc, Mutex, MutexGuard};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent};

use crate::input::KeyboardState;

/// Closures currently registered on the window. Dropping them unregisters nothing,
/// so they are kept here until `detach_keyboard_listeners` removes them.
pub(crate) struct KeyboardListeners {
    keydown: Closure<dyn FnMut(Event)>,
    keyup: Closure<dyn FnMut(Event)>,
    blur: Closure<dyn FnMut(Event)>,
}

pub(crate) type KeyboardListenersSlot = Arc<Mutex<Option<KeyboardListeners>>>;

/// Locks the keyboard state, recovering from a poisoned mutex.
pub(crate) fn lock_keyboard(keyboard_arc: &Arc<Mutex<KeyboardState>>) -> MutexGuard<'_, KeyboardState> {
    match keyboard_arc.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::error!("Keyboard mutex was poisoned! Recovering.");
            poisoned.into_inner()
        }
    }
}

fn lock_slot(slot: &KeyboardListenersSlot) -> MutexGuard<'_, Option<KeyboardListeners>> {
    match slot.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Attaches keydown / keyup / blur listeners to the window.
/// Calling it again while attached is a no-op.
pub(crate) fn attach_keyboard_listeners(
    keyboard_arc: Arc<Mutex<KeyboardState>>,
    listeners_slot: &KeyboardListenersSlot,
) -> Result<(), JsValue> {
    let mut slot = lock_slot(listeners_slot);
    if slot.is_some() {
        log::debug!("Keyboard listeners already attached.");
        return Ok(());
    }
    let window = window().ok_or("Failed to get window")?;

    // --- KeyDown Listener ---
    let keyboard_for_keydown = Arc::clone(&keyboard_arc);
    let keydown = Closure::wrap(Box::new(move |event: Event| {
        if let Ok(keyboard_event) = event.dyn_into::<KeyboardEvent>() {
            let handled = lock_keyboard(&keyboard_for_keydown).key_down(&keyboard_event.key());
            if handled {
                // Arrow keys would otherwise scroll the page.
                keyboard_event.prevent_default();
            }
        } else {
            log::error!("Failed to cast event to KeyboardEvent in keydown listener");
        }
    }) as Box<dyn FnMut(Event)>);

    // --- KeyUp Listener ---
    let keyboard_for_keyup = Arc::clone(&keyboard_arc);
    let keyup = Closure::wrap(Box::new(move |event: Event| {
        if let Ok(keyboard_event) = event.dyn_into::<KeyboardEvent>() {
            if lock_keyboard(&keyboard_for_keyup).key_up(&keyboard_event.key()) {
                keyboard_event.prevent_default();
            }
        } else {
            log::error!("Failed to cast event to KeyboardEvent in keyup listener");
        }
    }) as Box<dyn FnMut(Event)>);

    // --- Blur Listener ---
    // keyup never arrives once the window loses focus, so release everything.
    let keyboard_for_blur = Arc::clone(&keyboard_arc);
    let blur = Closure::wrap(Box::new(move |_event: Event| {
        lock_keyboard(&keyboard_for_blur).release_all();
    }) as Box<dyn FnMut(Event)>);

    window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref())?;

    *slot = Some(KeyboardListeners { keydown, keyup, blur });
    log::info!("Attached keyboard listeners.");
    Ok(())
}

/// Detaches the listeners from the window and clears held keys.
pub(crate) fn detach_keyboard_listeners(
    keyboard_arc: &Arc<Mutex<KeyboardState>>,
    listeners_slot: &KeyboardListenersSlot,
) -> Result<(), JsValue> {
    let listeners = match lock_slot(listeners_slot).take() {
        Some(listeners) => listeners,
        None => {
            log::debug!("Keyboard listeners were already detached or never attached.");
            return Ok(());
        }
    };
    let window = window().ok_or("Failed to get window")?;

    window.remove_event_listener_with_callback("keydown", listeners.keydown.as_ref().unchecked_ref())?;
    window.remove_event_listener_with_callback("keyup", listeners.keyup.as_ref().unchecked_ref())?;
    window.remove_event_listener_with_callback("blur", listeners.blur.as_ref().unchecked_ref())?;

    lock_keyboard(keyboard_arc).release_all();
    log::info!("Detached keyboard listeners.");
    Ok(())
}
