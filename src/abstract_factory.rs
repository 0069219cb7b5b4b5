//! # The Abstract Factory Pattern
//!
//! A [`WidgetFactory`] produces a whole family of related widgets (button,
//! checkbox, slider), and each concrete factory keeps its family consistent:
//! [`WinFactory`] only ever makes Windows-style widgets, [`MacFactory`] only
//! macOS-style ones. The [`Application`] is wired from whichever factory the
//! [`Platform`] selector names and never learns the concrete widget types.
//!
//! Picking a platform the crate ships no widget family for is a hard error
//! ([`UnknownPlatform`]), not a fallback.

use std::str::FromStr;

use thiserror::Error;

/// A clickable button.
pub trait Button {
    fn paint(&self) -> String;
}

/// A togglable checkbox.
pub trait Checkbox {
    fn paint(&self) -> String;
}

/// A draggable slider.
pub trait Slider {
    fn render(&self) -> String;
}

pub struct WinButton;

impl Button for WinButton {
    fn paint(&self) -> String {
        "Rendering a button in Windows style.".to_string()
    }
}

pub struct WinCheckbox;

impl Checkbox for WinCheckbox {
    fn paint(&self) -> String {
        "Rendering a checkbox in Windows style.".to_string()
    }
}

pub struct WinSlider;

impl Slider for WinSlider {
    fn render(&self) -> String {
        "Rendering a slider in Windows style.".to_string()
    }
}

pub struct MacButton;

impl Button for MacButton {
    fn paint(&self) -> String {
        "Rendering a button in macOS style.".to_string()
    }
}

pub struct MacCheckbox;

impl Checkbox for MacCheckbox {
    fn paint(&self) -> String {
        "Rendering a checkbox in macOS style.".to_string()
    }
}

pub struct MacSlider;

impl Slider for MacSlider {
    fn render(&self) -> String {
        "Rendering a slider in macOS style.".to_string()
    }
}

/// The abstract factory: one method per widget in the family.
pub trait WidgetFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
    fn create_slider(&self) -> Box<dyn Slider>;
}

/// Makes the Windows widget family.
pub struct WinFactory;

impl WidgetFactory for WinFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WinButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WinCheckbox)
    }

    fn create_slider(&self) -> Box<dyn Slider> {
        Box::new(WinSlider)
    }
}

/// Makes the macOS widget family.
pub struct MacFactory;

impl WidgetFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }

    fn create_slider(&self) -> Box<dyn Slider> {
        Box::new(MacSlider)
    }
}

/// Raised when a platform selector names no widget family this crate ships.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown platform selector: '{0}'")]
pub struct UnknownPlatform(String);

/// The platforms a widget family exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
}

impl Platform {
    /// The factory producing this platform's widget family.
    pub fn factory(self) -> Box<dyn WidgetFactory> {
        match self {
            Platform::Windows => Box::new(WinFactory),
            Platform::MacOs => Box::new(MacFactory),
        }
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    /// Accepts exactly the selector strings `"Windows"` and `"Mac"`.
    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        match selector {
            "Windows" => Ok(Platform::Windows),
            "Mac" => Ok(Platform::MacOs),
            other => Err(UnknownPlatform(other.to_string())),
        }
    }
}

/// Client code: holds one widget of each kind, all from the same family.
pub struct Application {
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
    slider: Box<dyn Slider>,
}

impl Application {
    /// Wire up an application from one factory, so the widgets always match.
    pub fn new(factory: &dyn WidgetFactory) -> Self {
        Self {
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
            slider: factory.create_slider(),
        }
    }

    /// Resolve a platform selector and wire up the matching application.
    pub fn from_selector(selector: &str) -> Result<Self, UnknownPlatform> {
        let platform: Platform = selector.parse()?;
        Ok(Self::new(platform.factory().as_ref()))
    }

    /// Paint every widget, one line each, in creation order.
    pub fn render(&self) -> Vec<String> {
        vec![
            self.button.paint(),
            self.checkbox.paint(),
            self.slider.render(),
        ]
    }
}
