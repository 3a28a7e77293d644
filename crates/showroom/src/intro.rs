//! Entrance choreography played once the loading overlay is gone.
//!
//! Side navigation items appear one by one (left column first, the right
//! column 200ms behind it) while the hero car drives in from the right and
//! its lamps fade in after it.

use bevy::prelude::*;

use crate::config::{
    CAR_DRIVE_DURATION, CAR_START_OFFSET, COLUMN_STAGGER, FRONT_LAMP_DELAY, FRONT_LAMP_OFFSET,
    LAMP_DURATION, REAR_LAMP_DELAY, REAR_LAMP_OFFSET, RIGHT_COLUMN_DELAY, SECTION_COUNT,
};
use crate::easing::Easing;
use crate::engine::{Animation, Property, PropertyKey, Target, TransitionEngine};

#[derive(Resource, Debug, Clone, Default)]
pub struct Intro {
    started: bool,
}

impl Intro {
    pub fn started(&self) -> bool {
        self.started
    }

    /// Hide everything the intro reveals.
    pub fn prepare(&self, engine: &mut dyn TransitionEngine) {
        engine.set_all(&Self::left_column(), Property::Visible, 0.0);
        engine.set_all(&Self::right_column(), Property::Visible, 0.0);
        engine.set(
            PropertyKey::new(Target::CarBody, Property::OffsetXPercent),
            CAR_START_OFFSET,
        );
        for (lamp, offset) in [
            (Target::FrontLamp, FRONT_LAMP_OFFSET),
            (Target::RearLamp, REAR_LAMP_OFFSET),
        ] {
            engine.set(PropertyKey::new(lamp, Property::OffsetXPercent), offset);
            engine.set(PropertyKey::new(lamp, Property::Opacity), 0.0);
        }
    }

    /// Schedule the choreography. Returns `false` if it already ran.
    pub fn start(&mut self, engine: &mut dyn TransitionEngine) -> bool {
        if self.started {
            return false;
        }
        self.started = true;

        engine.animate(
            Animation::to(Self::left_column(), Property::Visible, 1.0, 0.0).stagger(COLUMN_STAGGER),
        );
        engine.animate(
            Animation::to(Self::right_column(), Property::Visible, 1.0, 0.0)
                .delay(RIGHT_COLUMN_DELAY)
                .stagger(COLUMN_STAGGER),
        );

        engine.animate(
            Animation::to([Target::CarBody], Property::OffsetXPercent, 0.0, CAR_DRIVE_DURATION)
                .from_value(CAR_START_OFFSET)
                .easing(Easing::Power3Out),
        );
        for (lamp, offset, delay) in [
            (Target::FrontLamp, FRONT_LAMP_OFFSET, FRONT_LAMP_DELAY),
            (Target::RearLamp, REAR_LAMP_OFFSET, REAR_LAMP_DELAY),
        ] {
            engine.animate(
                Animation::to([lamp], Property::OffsetXPercent, 0.0, LAMP_DURATION)
                    .from_value(offset)
                    .delay(delay)
                    .easing(Easing::Power2Out),
            );
            engine.animate(
                Animation::to([lamp], Property::Opacity, 1.0, LAMP_DURATION)
                    .from_value(0.0)
                    .delay(delay)
                    .easing(Easing::Power2Out),
            );
        }
        true
    }

    fn left_column() -> Vec<Target> {
        (0..SECTION_COUNT).map(Target::LeftNav).collect()
    }

    fn right_column() -> Vec<Target> {
        (0..SECTION_COUNT).map(Target::RightNav).collect()
    }
}
