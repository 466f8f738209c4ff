use crate::params::*;

///Kind of move a driver iteration performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    ///Resample one coordinate
    Coordinate,
    ///Resample the projection onto a direction drawn from the pool
    Direction,
    ///Resample the projection onto the bias direction
    Bias
}

///Deterministic schedule choosing between coordinate, pooled-direction and
///bias moves from the iteration count alone: coordinate moves by default,
///a pooled-direction move every `INVPERIOD`-th iteration, and a bias move
///every `bias_period`-th iteration, overriding both.
#[derive(Clone, Debug)]
pub struct MoveSchedule {
    iperiod : usize,
    ibias : usize,
    bias_period : Option<usize>
}

impl MoveSchedule {
    pub fn new(bias_period : Option<usize>) -> MoveSchedule {
        MoveSchedule {
            iperiod : 0,
            ibias : 0,
            bias_period
        }
    }

    pub fn next_move(&mut self) -> Move {
        let mut result = Move::Coordinate;

        self.iperiod += 1;
        if (self.iperiod == INVPERIOD) {
            self.iperiod = 0;
            result = Move::Direction;
        }

        if let Option::Some(bias_period) = self.bias_period {
            self.ibias += 1;
            if (self.ibias == bias_period) {
                self.ibias = 0;
                result = Move::Bias;
            }
        }
        result
    }
}
