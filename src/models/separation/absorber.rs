//! Two-inlet, two-outlet absorber.
//!
//! The absorber combines its two inlet flows and sends 30% of the total to
//! its first outlet and 70% to its second. There is no energy balance or
//! composition tracking; only total mass flow is modeled.
//!
//! Two interfaces share the same calculation:
//!
//! - [`Absorber`]: a [`Device`] connected to streams in a [`StreamArena`].
//! - [`AbsorberModel`]: a stateless [`twine_core::Model`] mapping inlet
//!   flows directly to outlet flows.

mod core;

use self::core::split;
use twine_core::Model;
use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

use crate::support::{
    constraint::{Constrained, ConstraintError, NonNegative},
    flowsheet::{Device, DeviceError, Ports, StreamArena, StreamId},
};

const INPUTS: usize = 2;
const OUTPUTS: usize = 2;

/// An absorber connected to streams by handle.
///
/// Inputs and outputs are addressed in connection order: the first output
/// connected receives 30% of the combined inlet flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Absorber {
    inputs: Ports<INPUTS>,
    outputs: Ports<OUTPUTS>,
}

impl Absorber {
    /// Creates an absorber with no streams connected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn missing_streams(&self) -> DeviceError {
        DeviceError::MissingStreams {
            expected_inputs: INPUTS,
            inputs: self.inputs.len(),
            expected_outputs: OUTPUTS,
            outputs: self.outputs.len(),
        }
    }
}

impl Device for Absorber {
    fn input_capacity(&self) -> usize {
        self.inputs.capacity()
    }

    fn output_capacity(&self) -> usize {
        self.outputs.capacity()
    }

    fn inputs(&self) -> &[StreamId] {
        self.inputs.as_slice()
    }

    fn outputs(&self) -> &[StreamId] {
        self.outputs.as_slice()
    }

    fn add_input(&mut self, stream: StreamId) -> Result<(), DeviceError> {
        self.inputs
            .connect(stream)
            .map_err(|full| DeviceError::InputCapacityExceeded {
                capacity: full.capacity,
            })?;
        log::trace!("absorber input {} connected to {stream:?}", self.inputs.len());
        Ok(())
    }

    fn add_output(&mut self, stream: StreamId) -> Result<(), DeviceError> {
        self.outputs
            .connect(stream)
            .map_err(|full| DeviceError::OutputCapacityExceeded {
                capacity: full.capacity,
            })?;
        log::trace!("absorber output {} connected to {stream:?}", self.outputs.len());
        Ok(())
    }

    fn update_outputs(&self, streams: &mut StreamArena) -> Result<(), DeviceError> {
        let (Some(inputs), Some(outputs)) = (self.inputs.complete(), self.outputs.complete())
        else {
            return Err(self.missing_streams());
        };

        let inlets = [
            NonNegative::new(streams.mass_flow(inputs[0])?)?,
            NonNegative::new(streams.mass_flow(inputs[1])?)?,
        ];

        // Resolve every outlet before writing so a bad handle changes nothing.
        if let Some(&unknown) = outputs.iter().find(|&&id| streams.get(id).is_none()) {
            return Err(DeviceError::UnknownStream(unknown));
        }

        let outlets = split(inlets)?;

        for (id, flow) in outputs.into_iter().zip(outlets) {
            streams
                .get_mut(id)
                .ok_or(DeviceError::UnknownStream(id))?
                .set_constrained_mass_flow(flow);
        }

        log::debug!(
            "absorber split {:?} kg/s into {:?} kg/s",
            inlets.map(|f| f.into_inner().get::<kilogram_per_second>()),
            outlets.map(|f| f.into_inner().get::<kilogram_per_second>()),
        );

        Ok(())
    }
}

/// Stateless absorber model.
///
/// Maps the two inlet mass flow rates to the two outlet mass flow rates
/// without any stream bookkeeping.
///
/// ```
/// use twine_core::Model;
/// use twine_flowsheet::models::separation::AbsorberModel;
/// use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};
///
/// let inlets = [60.0, 40.0].map(|v| MassRate::new::<kilogram_per_second>(v));
/// let [first, second] = AbsorberModel.call(&inlets).unwrap();
///
/// assert!((first.get::<kilogram_per_second>() - 30.0).abs() < 1e-12);
/// assert!((second.get::<kilogram_per_second>() - 70.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsorberModel;

impl Model for AbsorberModel {
    type Input = [MassRate; INPUTS];
    type Output = [MassRate; OUTPUTS];
    type Error = ConstraintError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let inlets = [NonNegative::new(input[0])?, NonNegative::new(input[1])?];
        Ok(split(inlets)?.map(Constrained::into_inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn kg_per_s(value: f64) -> MassRate {
        MassRate::new::<kilogram_per_second>(value)
    }

    /// Two inlets at the given flows and two fresh outlets, all connected.
    fn connected(a: f64, b: f64) -> (StreamArena, Absorber, [StreamId; 2]) {
        let mut streams = StreamArena::new();
        let ids = [
            streams.create(),
            streams.create(),
            streams.create(),
            streams.create(),
        ];
        streams.set_mass_flow(ids[0], kg_per_s(a)).unwrap();
        streams.set_mass_flow(ids[1], kg_per_s(b)).unwrap();

        let mut absorber = Absorber::new();
        absorber.add_input(ids[0]).unwrap();
        absorber.add_input(ids[1]).unwrap();
        absorber.add_output(ids[2]).unwrap();
        absorber.add_output(ids[3]).unwrap();

        (streams, absorber, [ids[2], ids[3]])
    }

    fn outlet_flows(streams: &StreamArena, outlets: [StreamId; 2]) -> [f64; 2] {
        outlets.map(|id| streams.mass_flow(id).unwrap().get::<kilogram_per_second>())
    }

    #[test]
    fn capacities() {
        let absorber = Absorber::new();
        assert_eq!(absorber.input_capacity(), 2);
        assert_eq!(absorber.output_capacity(), 2);
        assert!(absorber.inputs().is_empty());
        assert!(absorber.outputs().is_empty());
    }

    #[test]
    fn third_input_is_rejected() {
        let mut streams = StreamArena::new();
        let mut absorber = Absorber::new();
        absorber.add_input(streams.create()).unwrap();
        absorber.add_input(streams.create()).unwrap();

        let result = absorber.add_input(streams.create());

        assert_eq!(
            result,
            Err(DeviceError::InputCapacityExceeded { capacity: 2 })
        );
        assert_eq!(absorber.inputs().len(), 2);
    }

    #[test]
    fn third_output_is_rejected() {
        let mut streams = StreamArena::new();
        let mut absorber = Absorber::new();
        absorber.add_output(streams.create()).unwrap();
        absorber.add_output(streams.create()).unwrap();

        let result = absorber.add_output(streams.create());

        assert_eq!(
            result,
            Err(DeviceError::OutputCapacityExceeded { capacity: 2 })
        );
        assert_eq!(absorber.outputs().len(), 2);
    }

    #[test]
    fn connection_order_is_preserved() {
        let mut streams = StreamArena::new();
        let first = streams.create();
        let second = streams.create();
        let mut absorber = Absorber::new();
        absorber.add_input(second).unwrap();
        absorber.add_input(first).unwrap();

        assert_eq!(absorber.inputs(), &[second, first]);
    }

    #[test]
    fn mass_balance() {
        let (mut streams, absorber, outlets) = connected(10.0, 15.0);

        absorber.update_outputs(&mut streams).unwrap();

        let [first, second] = outlet_flows(&streams, outlets);
        assert_relative_eq!(first, 7.5, epsilon = 0.01);
        assert_relative_eq!(second, 17.5, epsilon = 0.01);
        assert_relative_eq!(first + second, 25.0, epsilon = 0.01);
    }

    #[test]
    fn thirty_seventy_distribution() {
        let (mut streams, absorber, outlets) = connected(60.0, 40.0);

        absorber.update_outputs(&mut streams).unwrap();

        let [first, second] = outlet_flows(&streams, outlets);
        assert_relative_eq!(first, 30.0, epsilon = 0.01);
        assert_relative_eq!(second, 70.0, epsilon = 0.01);
    }

    #[test]
    fn inputs_are_not_modified() {
        let (mut streams, absorber, _) = connected(60.0, 40.0);

        absorber.update_outputs(&mut streams).unwrap();

        let inlets = [absorber.inputs()[0], absorber.inputs()[1]];
        assert_eq!(outlet_flows(&streams, inlets), [60.0, 40.0]);
    }

    #[test]
    fn missing_output_fails_without_side_effects() {
        let mut streams = StreamArena::new();
        let ids = [streams.create(), streams.create(), streams.create()];
        streams.set_mass_flow(ids[0], kg_per_s(5.0)).unwrap();
        streams.set_mass_flow(ids[1], kg_per_s(5.0)).unwrap();
        streams.set_mass_flow(ids[2], kg_per_s(1.0)).unwrap();

        let mut absorber = Absorber::new();
        absorber.add_input(ids[0]).unwrap();
        absorber.add_input(ids[1]).unwrap();
        absorber.add_output(ids[2]).unwrap();

        let result = absorber.update_outputs(&mut streams);

        assert_eq!(
            result,
            Err(DeviceError::MissingStreams {
                expected_inputs: 2,
                inputs: 2,
                expected_outputs: 2,
                outputs: 1,
            })
        );
        assert_eq!(streams.mass_flow(ids[2]), Ok(kg_per_s(1.0)));
    }

    #[test]
    fn missing_input_fails() {
        let mut streams = StreamArena::new();
        let mut absorber = Absorber::new();
        absorber.add_input(streams.create()).unwrap();
        absorber.add_output(streams.create()).unwrap();
        absorber.add_output(streams.create()).unwrap();

        assert!(matches!(
            absorber.update_outputs(&mut streams),
            Err(DeviceError::MissingStreams { inputs: 1, .. })
        ));
    }

    #[test]
    fn foreign_outlet_changes_nothing() {
        let mut streams = StreamArena::new();
        let ids = [streams.create(), streams.create(), streams.create()];
        streams.set_mass_flow(ids[0], kg_per_s(10.0)).unwrap();
        streams.set_mass_flow(ids[1], kg_per_s(10.0)).unwrap();
        let foreign = streams.clone().create();

        let mut absorber = Absorber::new();
        absorber.add_input(ids[0]).unwrap();
        absorber.add_input(ids[1]).unwrap();
        absorber.add_output(ids[2]).unwrap();
        absorber.add_output(foreign).unwrap();

        let result = absorber.update_outputs(&mut streams);

        assert_eq!(result, Err(DeviceError::UnknownStream(foreign)));
        assert_eq!(streams.mass_flow(ids[2]), Ok(kg_per_s(0.0)));
    }

    #[test]
    fn model_matches_device() {
        let (mut streams, absorber, outlets) = connected(12.0, 3.5);
        absorber.update_outputs(&mut streams).unwrap();

        let model_out = AbsorberModel
            .call(&[kg_per_s(12.0), kg_per_s(3.5)])
            .unwrap()
            .map(|m| m.get::<kilogram_per_second>());

        assert_eq!(model_out, outlet_flows(&streams, outlets));
    }

    #[test]
    fn model_rejects_negative_inlet() {
        assert_eq!(
            AbsorberModel.call(&[kg_per_s(-1.0), kg_per_s(3.0)]),
            Err(ConstraintError::Negative)
        );
    }
}
