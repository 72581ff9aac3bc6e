//! Property capabilities
//!
//! Animators never see a widget's concrete type. They read and write through
//! a [`Property`], a getter/setter pair bound to one value on one target.

use std::sync::{Arc, Mutex, PoisonError, Weak};

/// Reads the current value; `None` when the target is gone
pub type Getter<T> = Box<dyn Fn() -> Option<T> + Send>;

/// Writes a new value
pub type Setter<T> = Box<dyn FnMut(T) + Send>;

/// Getter/setter capability for one animatable value
pub struct Property<T> {
    getter: Option<Getter<T>>,
    setter: Option<Setter<T>>,
}

impl<T: 'static> Property<T> {
    /// A property with neither getter nor setter
    pub fn unbound() -> Self {
        Self {
            getter: None,
            setter: None,
        }
    }

    /// Build a property from a plain getter and setter
    pub fn new<G, S>(getter: G, setter: S) -> Self
    where
        G: Fn() -> T + Send + 'static,
        S: FnMut(T) + Send + 'static,
    {
        Self {
            getter: Some(Box::new(move || Some(getter()))),
            setter: Some(Box::new(setter)),
        }
    }

    /// Builder: set the getter
    pub fn with_getter<G: Fn() -> Option<T> + Send + 'static>(mut self, getter: G) -> Self {
        self.getter = Some(Box::new(getter));
        self
    }

    /// Builder: set the setter
    pub fn with_setter<S: FnMut(T) + Send + 'static>(mut self, setter: S) -> Self {
        self.setter = Some(Box::new(setter));
        self
    }

    pub fn set_getter(&mut self, getter: Option<Getter<T>>) {
        self.getter = getter;
    }

    pub fn set_setter(&mut self, setter: Option<Setter<T>>) {
        self.setter = setter;
    }

    /// True when both halves of the capability are present
    pub fn is_bound(&self) -> bool {
        self.getter.is_some() && self.setter.is_some()
    }

    /// Read the value, if the property is readable and its target alive
    pub fn get(&self) -> Option<T> {
        self.getter.as_ref().and_then(|getter| getter())
    }

    /// Write a value; returns false when there is no setter
    pub fn set(&mut self, value: T) -> bool {
        match self.setter.as_mut() {
            Some(setter) => {
                setter(value);
                true
            }
            None => false,
        }
    }
}

impl<T: Copy + Send + 'static> Property<T> {
    /// Bind to a shared in-memory cell
    pub fn shared(cell: Arc<Mutex<T>>) -> Self {
        let read = Arc::clone(&cell);
        Self {
            getter: Some(Box::new(move || {
                Some(*read.lock().unwrap_or_else(PoisonError::into_inner))
            })),
            setter: Some(Box::new(move |value| {
                *cell.lock().unwrap_or_else(PoisonError::into_inner) = value;
            })),
        }
    }
}

impl<T: 'static> Default for Property<T> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<T> std::fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("getter", &self.getter.is_some())
            .field("setter", &self.setter.is_some())
            .finish()
    }
}

// ============================================================================
// Widget position binding
// ============================================================================

/// Integer position of a widget in its parent
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn axis(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    pub fn with_axis(mut self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
        self
    }
}

/// Which coordinate of a position a capability drives
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// A widget whose position can be read and written
pub trait Positioned: Send {
    fn position(&self) -> Position;
    fn set_position(&mut self, position: Position);
}

impl Property<i32> {
    /// Bind one axis of a widget's position
    ///
    /// Only a weak reference is kept: once the widget is dropped the getter
    /// reports `None` and writes are discarded.
    pub fn axis<W: Positioned + 'static>(widget: &Arc<Mutex<W>>, axis: Axis) -> Self {
        let read: Weak<Mutex<W>> = Arc::downgrade(widget);
        let write = read.clone();
        Self {
            getter: Some(Box::new(move || {
                let widget = read.upgrade()?;
                let position = widget
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .position();
                Some(position.axis(axis))
            })),
            setter: Some(Box::new(move |value| {
                if let Some(widget) = write.upgrade() {
                    let mut widget = widget.lock().unwrap_or_else(PoisonError::into_inner);
                    let position = widget.position().with_axis(axis, value);
                    widget.set_position(position);
                }
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Panel {
        position: Position,
    }

    impl Positioned for Panel {
        fn position(&self) -> Position {
            self.position
        }

        fn set_position(&mut self, position: Position) {
            self.position = position;
        }
    }

    #[test]
    fn test_shared_cell_property() {
        let cell = Arc::new(Mutex::new(4));
        let mut prop = Property::shared(cell.clone());

        assert!(prop.is_bound());
        assert_eq!(prop.get(), Some(4));
        assert!(prop.set(11));
        assert_eq!(*cell.lock().unwrap(), 11);
    }

    #[test]
    fn test_unbound_property() {
        let mut prop = Property::<i32>::unbound();
        assert!(!prop.is_bound());
        assert_eq!(prop.get(), None);
        assert!(!prop.set(1));
    }

    #[test]
    fn test_axis_property_writes_single_axis() {
        let panel = Arc::new(Mutex::new(Panel {
            position: Position::new(10, 20),
        }));
        let mut x = Property::axis(&panel, Axis::X);
        let y = Property::axis(&panel, Axis::Y);

        assert_eq!(x.get(), Some(10));
        assert_eq!(y.get(), Some(20));

        x.set(99);
        assert_eq!(panel.lock().unwrap().position, Position::new(99, 20));
    }

    #[test]
    fn test_axis_property_does_not_keep_widget_alive() {
        let panel = Arc::new(Mutex::new(Panel {
            position: Position::default(),
        }));
        let mut x = Property::axis(&panel, Axis::X);
        drop(panel);

        assert_eq!(x.get(), None);
        // Setter is still present, the write is just dropped
        assert!(x.set(5));
    }
}
