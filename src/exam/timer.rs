use std::time::{Duration, Instant};

/// Asa cancelable de la cuenta atrás. Se arma para una generación de examen
/// concreta y convierte el tiempo transcurrido en ticks de un segundo.
/// Si el examen activo ya no es esa generación no produce ticks.
#[derive(Debug, Default)]
pub struct ExamTimer {
    armed: Option<Armed>,
}

#[derive(Debug)]
struct Armed {
    generation: u64,
    last_poll: Instant,
    carry: Duration,
}

impl ExamTimer {
    pub fn arm(&mut self, generation: u64, now: Instant) {
        log::debug!("exam timer armed for generation {generation}");
        self.armed = Some(Armed {
            generation,
            last_poll: now,
            carry: Duration::ZERO,
        });
    }

    pub fn cancel(&mut self) {
        if let Some(armed) = self.armed.take() {
            log::debug!("exam timer cancelled (generation {})", armed.generation);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn armed_for(&self) -> Option<u64> {
        self.armed.as_ref().map(|a| a.generation)
    }

    /// Segundos completos transcurridos desde el último sondeo
    pub fn poll(&mut self, generation: u64, now: Instant) -> u32 {
        let Some(armed) = self.armed.as_mut() else {
            return 0;
        };
        if armed.generation != generation {
            // Temporizador de un examen anterior
            self.cancel();
            return 0;
        }

        let elapsed = now.saturating_duration_since(armed.last_poll) + armed.carry;
        let ticks = elapsed.as_secs();
        armed.carry = elapsed - Duration::from_secs(ticks);
        armed.last_poll = now;
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    /// Tiempo hasta el próximo tick, para programar el repintado
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.armed
            .as_ref()
            .map(|a| Duration::from_secs(1).saturating_sub(a.carry))
    }
}

impl Drop for ExamTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_elapsed_time_into_whole_ticks() {
        let t0 = Instant::now();
        let mut timer = ExamTimer::default();
        assert_eq!(timer.poll(1, t0 + Duration::from_secs(5)), 0, "sin armar");

        timer.arm(1, t0);
        assert_eq!(timer.poll(1, t0 + Duration::from_millis(600)), 0);
        assert_eq!(timer.poll(1, t0 + Duration::from_millis(1_200)), 1);
        assert_eq!(timer.poll(1, t0 + Duration::from_millis(4_300)), 3);
        assert_eq!(timer.until_next_tick(), Some(Duration::from_millis(700)));
    }

    #[test]
    fn stale_generation_never_ticks() {
        let t0 = Instant::now();
        let mut timer = ExamTimer::default();
        timer.arm(1, t0);
        assert_eq!(timer.poll(2, t0 + Duration::from_secs(10)), 0);
        assert!(!timer.is_armed());
    }

    #[test]
    fn cancelled_timer_stays_silent() {
        let t0 = Instant::now();
        let mut timer = ExamTimer::default();
        timer.arm(3, t0);
        timer.cancel();
        assert_eq!(timer.poll(3, t0 + Duration::from_secs(10)), 0);
        assert_eq!(timer.armed_for(), None);
    }
}
