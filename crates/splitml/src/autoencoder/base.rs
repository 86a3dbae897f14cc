use burn::config::Config;

use super::AutoencoderError;

/// Configuration shared by [ComplexNet](super::ComplexNet) and
/// [DualRealNet](super::DualRealNet).
///
/// Both follow the `t_input -> M -> H -> M -> t_input` topology. `H <= M <= t_input` is what
/// makes the network a bottleneck, but other widths are accepted and only reported with a
/// warning when the network is initialized.
#[derive(Config, Debug)]
pub struct AutoencoderConfig {
    /// Length of the signal, the size of the last input dimension.
    pub t_input: usize,
    /// Output size of the linear stage.
    #[config(default = 10)]
    pub m: usize,
    /// Output size of the hidden stage, the size of the embedding.
    #[config(default = 5)]
    pub h: usize,
    /// If the linear stages apply a bias.
    #[config(default = true)]
    pub bias: bool,
}

impl AutoencoderConfig {
    /// Checks that every width is positive and that `H <= M <= t_input`.
    pub fn check(&self) -> Result<(), AutoencoderError> {
        for (name, dim) in [("t_input", self.t_input), ("M", self.m), ("H", self.h)] {
            if dim == 0 {
                return Err(AutoencoderError::ZeroDimension { name });
            }
        }

        if self.h > self.m || self.m > self.t_input {
            return Err(AutoencoderError::NotABottleneck {
                t_input: self.t_input,
                m: self.m,
                h: self.h,
            });
        }

        Ok(())
    }

    pub(crate) fn log_init(&self, kind: &str) {
        if let Err(err) = self.check() {
            log::warn!("Initializing {kind} with an invalid configuration: {err}");
        }

        log::debug!(
            "Initialized {kind}: {t} -> {m} -> {h} -> {m} -> {t}",
            t = self.t_input,
            m = self.m,
            h = self.h,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AutoencoderConfig::new(32);

        assert_eq!(config.m, 10);
        assert_eq!(config.h, 5);
        assert!(config.bias);
        assert_eq!(config.check(), Ok(()));
    }

    #[test]
    fn no_compression_is_valid() {
        let config = AutoencoderConfig::new(8).with_m(8).with_h(8);

        assert_eq!(config.check(), Ok(()));
    }

    #[test]
    fn wider_hidden_stage_is_not_a_bottleneck() {
        let config = AutoencoderConfig::new(16).with_m(4).with_h(6);

        assert_eq!(
            config.check(),
            Err(AutoencoderError::NotABottleneck {
                t_input: 16,
                m: 4,
                h: 6
            })
        );
    }

    #[test]
    fn zero_width_is_reported() {
        let config = AutoencoderConfig::new(16).with_h(0);

        assert_eq!(
            config.check(),
            Err(AutoencoderError::ZeroDimension { name: "H" })
        );
    }
}
